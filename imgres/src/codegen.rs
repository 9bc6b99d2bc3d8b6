use crate::{collector::ResourceCollection, common::Result};

const HEADER: &str = "/* eslint:disable */\n/* tslint:disable */";
const TYPE_IMPORT: &str = "\nimport {ImageURISource} from \"react-native\";";

/// Renders the collections into one generated source document: the linter
/// header, the type import when `typescript` is set, then one class
/// declaration per collection in the given order. Members appear in the
/// order their entries were collected.
pub fn generate_document(collections: &[ResourceCollection], typescript: bool) -> Result<String> {
    let mut document = String::from(HEADER);
    if typescript {
        document.push_str(TYPE_IMPORT);
    }
    for collection in collections {
        document.push_str(&generate_class_export(collection, typescript)?);
    }
    Ok(document)
}

fn generate_class_export(collection: &ResourceCollection, typescript: bool) -> Result<String> {
    let mut declarations = Vec::new();
    for entry in collection.entries() {
        let variable_name = entry.variable_name();
        let resource_path = entry.relative_resource_path()?;
        let declaration = if typescript {
            format!("  static readonly {variable_name}: ImageURISource = require(\"{resource_path}\");")
        } else {
            format!("  static {variable_name} = require(\"{resource_path}\");")
        };
        declarations.push(declaration);
    }
    Ok(format!(
        "\n\nexport class {} {{\n{}\n}}",
        collection.name(),
        declarations.join("\n")
    ))
}

#[cfg(test)]
mod tests {
    use indoc::indoc;

    use crate::collector::ResourceEntry;

    use super::*;

    fn sample_collections() -> Vec<ResourceCollection> {
        vec![
            ResourceCollection::new(
                "IconsResources",
                vec![ResourceEntry::new("/project/assets/icons", "/project/assets", "home.png")],
            ),
            ResourceCollection::new(
                "ImageResources",
                vec![ResourceEntry::new("/project/assets", "/project/assets", "photo.png")],
            ),
        ]
    }

    #[test]
    fn untyped_document() {
        let document = generate_document(&sample_collections(), false).unwrap();
        let expected = indoc! {r#"
            /* eslint:disable */
            /* tslint:disable */

            export class IconsResources {
              static home = require("./icons/home.png");
            }

            export class ImageResources {
              static photo = require("./photo.png");
            }"#};
        assert_eq!(document, expected);
    }

    #[test]
    fn typed_document() {
        let document = generate_document(&sample_collections(), true).unwrap();
        let expected = indoc! {r#"
            /* eslint:disable */
            /* tslint:disable */
            import {ImageURISource} from "react-native";

            export class IconsResources {
              static readonly home: ImageURISource = require("./icons/home.png");
            }

            export class ImageResources {
              static readonly photo: ImageURISource = require("./photo.png");
            }"#};
        assert_eq!(document, expected);
    }

    #[test]
    fn empty_collection_renders_an_empty_class_body() {
        let collections = vec![ResourceCollection::new("EmptyResources", Vec::new())];
        let document = generate_document(&collections, false).unwrap();
        assert!(document.ends_with("export class EmptyResources {\n\n}"));
    }
}
