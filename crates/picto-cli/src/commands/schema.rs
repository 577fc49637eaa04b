use anyhow::bail;
use picto_schema::SchemaRegistry;

use crate::cli::SchemaArgs;

/// Handle `picto schema`.
pub fn handle(args: &SchemaArgs) -> anyhow::Result<()> {
    println!("{}", render(args, &SchemaRegistry::new())?);
    Ok(())
}

fn render(args: &SchemaArgs, registry: &SchemaRegistry) -> anyhow::Result<String> {
    let Some(name) = args.name.as_deref() else {
        return Ok(registry.list().join("\n"));
    };
    match registry.get(name) {
        Some(schema) => Ok(serde_json::to_string_pretty(schema)?),
        None => bail!(
            "unknown schema '{name}'; available: {}",
            registry.list().join(", ")
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn lists_names_without_argument() {
        let out = render(&SchemaArgs { name: None }, &SchemaRegistry::new()).unwrap();
        assert_eq!(out.lines().count(), 8);
        assert!(out.lines().any(|l| l == "comment_dict"));
    }

    #[test]
    fn prints_named_schema_as_json() {
        let args = SchemaArgs {
            name: Some("user".into()),
        };
        let out = render(&args, &SchemaRegistry::new()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert!(value["properties"]["email"].is_object());
    }

    #[test]
    fn unknown_name_lists_alternatives() {
        let args = SchemaArgs {
            name: Some("likes".into()),
        };
        let err = render(&args, &SchemaRegistry::new()).unwrap_err();
        assert!(err.to_string().contains("post_dict"));
    }
}
