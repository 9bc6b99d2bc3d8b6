/// Fixed class name generated for the scan root.
pub const ROOT_CLASS_NAME: &str = "ImageResources";

const CLASS_NAME_SUFFIX: &str = "Resources";

/// Class name for a directory: the basename with its first character
/// upper-cased plus the `Resources` suffix. Only the first character is
/// case-normalized; the remaining characters pass through unchanged so that
/// generated identifiers stay compatible with consumers of the historical
/// naming scheme. This is deliberately not a full PascalCase conversion.
pub fn class_name(directory_name: &str) -> String {
    let mut chars = directory_name.chars();
    let capitalized = match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
        None => String::new(),
    };
    format!("{capitalized}{CLASS_NAME_SUFFIX}")
}

/// Member name for a file: the sanitized filename with its extension
/// stripped and every character outside `[A-Za-z0-9_]` replaced with an
/// underscore. A leading digit gets an underscore prefix so that the result
/// is a valid static member name in the generated dialect.
pub fn variable_name(file_name: &str) -> String {
    let stem = match file_name.rfind('.') {
        Some(index) if index > 0 => &file_name[..index],
        _ => file_name,
    };
    let mut name = stem
        .chars()
        .map(|ch| match ch {
            'A'..='Z' | 'a'..='z' | '0'..='9' | '_' => ch,
            _ => '_',
        })
        .collect::<String>();
    if name.chars().next().is_some_and(|ch| ch.is_ascii_digit()) {
        name.insert(0, '_');
    }
    name
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn class_name_capitalizes_only_the_first_character() {
        assert_eq!(class_name("icons"), "IconsResources");
        assert_eq!(class_name("subMenu"), "SubMenuResources");
        assert_eq!(class_name("APP"), "APPResources");
        assert_eq!(class_name("2x"), "2xResources");
    }

    #[test]
    fn variable_name_strips_the_extension() {
        assert_eq!(variable_name("home.png"), "home");
        assert_eq!(variable_name("app.icon.png"), "app_icon");
        assert_eq!(variable_name("no_extension"), "no_extension");
    }

    #[test]
    fn variable_name_is_a_valid_identifier() {
        assert_eq!(variable_name("1home.png"), "_1home");
        assert_eq!(variable_name(".hidden"), "_hidden");
    }
}
