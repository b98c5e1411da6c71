#![cfg(test)]
//! The desktop launcher must still compile with `--no-default-features`, so
//! every desktop-only item sits behind the `desktop` feature.

const LAUNCHER: &str = include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/src/main.rs"));

const GATE: &str = "#[cfg(feature = \"desktop\")]";

/// Attribute line directly above the item starting at `line_index`.
fn attribute_above(lines: &[&str], line_index: usize) -> Option<String> {
    lines[..line_index]
        .iter()
        .rev()
        .map(|l| l.trim())
        .find(|l| !l.is_empty())
        .map(str::to_string)
}

#[test]
fn desktop_imports_are_feature_gated() {
    let lines: Vec<&str> = LAUNCHER.lines().collect();
    let imports: Vec<usize> = lines
        .iter()
        .enumerate()
        .filter(|(_, l)| l.trim_start().starts_with("use dioxus::"))
        .map(|(i, _)| i)
        .collect();
    assert!(!imports.is_empty(), "launcher imports nothing from dioxus");
    for index in imports {
        assert_eq!(
            attribute_above(&lines, index).as_deref(),
            Some(GATE),
            "ungated import: {}",
            lines[index]
        );
    }
}

#[test]
fn desktop_main_is_gated_and_has_a_fallback() {
    let lines: Vec<&str> = LAUNCHER.lines().collect();
    let mains: Vec<usize> = lines
        .iter()
        .enumerate()
        .filter(|(_, l)| l.trim_start().starts_with("fn main()"))
        .map(|(i, _)| i)
        .collect();
    assert_eq!(mains.len(), 2, "expected a desktop main and a fallback main");

    let attributes: Vec<String> = mains
        .iter()
        .filter_map(|&i| attribute_above(&lines, i))
        .collect();
    assert!(attributes.iter().any(|a| a == GATE), "{attributes:?}");
    assert!(
        attributes
            .iter()
            .any(|a| a == "#[cfg(not(feature = \"desktop\"))]"),
        "{attributes:?}"
    );
}

#[test]
fn desktop_builder_lives_only_in_the_gated_main() {
    let gated_main = LAUNCHER
        .split(GATE)
        .find(|chunk| chunk.trim_start().starts_with("fn main()"))
        .expect("gated desktop main");
    assert!(gated_main.contains("LaunchBuilder::desktop()"));

    let fallback = LAUNCHER
        .split("#[cfg(not(feature = \"desktop\"))]")
        .nth(1)
        .expect("fallback main");
    assert!(!fallback.contains("dioxus::desktop"));
    assert!(!fallback.contains("LaunchBuilder::desktop"));
}
