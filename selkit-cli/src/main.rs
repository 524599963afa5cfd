//! selkit CLI
//!
//! Builds a CSS selector from a JSON recipe or from parts given on the
//! command line, and prints it.

use std::fs;
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result, bail};
use clap::Parser;
use selkit_common::warning;
use selkit_css::recipe::{self, Recipe};
use selkit_css::selector::{Combinator, Part, PartKind, SelectorBuilder};

/// Build CSS selectors with part-order checking.
#[derive(Debug, Parser)]
#[command(name = "selkit", version)]
struct Cli {
    /// JSON recipe file.
    #[arg(conflicts_with_all = ["json", "parts"])]
    file: Option<PathBuf>,

    /// Inline JSON recipe.
    #[arg(long, conflicts_with = "parts")]
    json: Option<String>,

    /// Parts of one compound selector, as KIND=VALUE (e.g. element=a attr='href$=".png"').
    #[arg(long, num_args = 1.., value_parser = parse_part)]
    parts: Vec<Part>,

    /// Print the canonical part order and exit.
    #[arg(long)]
    kinds: bool,
}

fn main() -> ExitCode {
    match run(Cli::parse()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            warning::error(&format!("{err:#}"));
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    if cli.kinds {
        for kind in PartKind::ALL {
            println!("{} {kind}", kind.rank());
        }
        return Ok(());
    }

    let selector = if cli.parts.is_empty() {
        let source = match (cli.json, cli.file) {
            (Some(json), _) => json,
            (None, Some(path)) => fs::read_to_string(&path)
                .with_context(|| format!("failed to read recipe {}", path.display()))?,
            (None, None) => bail!("expected a recipe file, --json or --parts"),
        };
        let recipe = recipe::from_json(&source)?;
        warn_unknown_combinators(&recipe);
        recipe.build()?
    } else {
        SelectorBuilder::from_parts(cli.parts)?
    };

    println!("{}", selector.stringify());
    Ok(())
}

/// Tokens are passed through verbatim; flag the ones CSS does not define.
fn warn_unknown_combinators(recipe: &Recipe) {
    for token in recipe.combinators() {
        if Combinator::from_token(token).is_none() {
            warning::warn_once("recipe", &format!("unknown combinator token {token:?}"));
        }
    }
}

/// Parse `KIND=VALUE`. The value may itself contain `=`.
fn parse_part(raw: &str) -> Result<Part, String> {
    let (kind, value) = raw
        .split_once('=')
        .ok_or_else(|| format!("expected KIND=VALUE, got {raw:?}"))?;
    let kind: PartKind = kind
        .parse()
        .map_err(|_| format!("unknown part kind {kind:?}"))?;
    Ok(Part::new(kind, value))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_part_keeps_equals_in_value() {
        let part = parse_part(r#"attr=href$=".png""#).unwrap();
        assert_eq!(part, Part::Attribute(r#"href$=".png""#.to_string()));
    }

    #[test]
    fn test_parse_part_kebab_case_kinds() {
        assert_eq!(
            parse_part("pseudo-class=focus").unwrap(),
            Part::PseudoClass("focus".to_string())
        );
        assert_eq!(
            parse_part("attribute=disabled").unwrap().kind(),
            PartKind::Attribute
        );
    }

    #[test]
    fn test_parse_part_rejects_unknown_kind() {
        assert!(parse_part("tag=div").is_err());
        assert!(parse_part("element").is_err());
    }

    fn run_json(json: &str) -> Result<()> {
        run(Cli::parse_from(["selkit", "--json", json]))
    }

    #[test]
    fn test_run_nested_recipe() {
        let json = r#"{ "combine": {
            "left": { "compound": [{ "element": "ul" }, { "class": "nav" }] },
            "combinator": ">",
            "right": { "combine": {
                "left": { "compound": [{ "element": "li" }] },
                "combinator": " ",
                "right": { "compound": [{ "element": "a" }, { "attr": "href" }] }
            } }
        } }"#;
        assert!(run_json(json).is_ok());
        assert!(!warning::was_warned("recipe", "unknown combinator token \">\""));
    }

    #[test]
    fn test_run_out_of_order_recipe_fails() {
        let err = run_json(r#"{ "compound": [{ "pseudo_class": "hover" }, { "class": "btn" }] }"#)
            .unwrap_err();
        assert!(err.to_string().contains("should be arranged in the following order"));
    }

    #[test]
    fn test_run_malformed_json_fails() {
        let err = run_json("{ not json").unwrap_err();
        assert!(err.to_string().starts_with("invalid recipe JSON"));
    }

    #[test]
    fn test_run_warns_on_unknown_combinator() {
        let json = r#"{ "combine": {
            "left": { "compound": [{ "element": "col" }] },
            "combinator": "||",
            "right": { "compound": [{ "element": "td" }] }
        } }"#;
        assert!(run_json(json).is_ok());
        assert!(warning::was_warned("recipe", "unknown combinator token \"||\""));
    }

    #[test]
    fn test_run_without_input_fails() {
        let err = run(Cli::parse_from(["selkit"])).unwrap_err();
        assert_eq!(err.to_string(), "expected a recipe file, --json or --parts");
    }

    #[test]
    fn test_run_missing_file_fails() {
        let err = run(Cli::parse_from(["selkit", "/nonexistent/selkit-recipe.json"])).unwrap_err();
        assert!(err.to_string().starts_with("failed to read recipe"));
    }

    #[test]
    fn test_run_kinds() {
        assert!(run(Cli::parse_from(["selkit", "--kinds"])).is_ok());
    }

    #[test]
    fn test_cli_parts_build_in_order() {
        let cli = Cli::parse_from(["selkit", "--parts", "element=a", "class=x", "pseudo-class=hover"]);
        let selector = SelectorBuilder::from_parts(cli.parts).unwrap();
        assert_eq!(selector.stringify(), "a.x:hover");
    }
}
