//! Path string parsers for the two supported grammars.
//!
//! Go-patch style paths start with a slash (`/yaml/simple-list/1`), dot-style
//! paths use dots as separators (`yaml.simple-list.1`). Both grammars accept
//! an optional decimal document index prefix (`1:/yaml`). The grammar is
//! auto-detected by [`parse_path`]: if the remainder after the optional
//! prefix starts with a slash, it is treated as go-patch style.

use crate::error::Error;
use crate::path::model::{Path, PathStyle, Section};

/// Parses a path string, auto-detecting the grammar.
pub fn parse_path(input: &str) -> Result<Path, Error> {
    let (_, remainder) = split_document_index(input);

    if remainder.starts_with('/') {
        parse_go_patch_style(input)
    } else {
        parse_dot_style(input)
    }
}

/// Parses a path string that is assumed to be in go-patch style.
pub fn parse_go_patch_style(input: &str) -> Result<Path, Error> {
    let (prefix, remainder) = split_document_index(input);
    let doc_idx = parse_document_index(prefix, PathStyle::GoPatchStyle, input)?;

    if remainder == "/" {
        return Ok(Path::for_document(doc_idx));
    }

    if !remainder.starts_with('/') {
        return Err(Error::InvalidPath {
            style: PathStyle::GoPatchStyle,
            path: input.to_string(),
            reason: "failed to parse path string, because path does not match expected format"
                .to_string(),
        });
    }

    let mut sections = Vec::new();
    // The leading slash produces an empty first token, skip it.
    for token in split_unescaped(remainder, '/').into_iter().skip(1) {
        match token.split_once('=') {
            Some((id, name)) => sections.push(Section::named(id, name)),
            None => match token.parse::<i64>() {
                Ok(idx) => sections.push(Section::index(idx)),
                Err(_) => sections.push(Section::field(token)),
            },
        }
    }

    Ok(Path::new(doc_idx, sections))
}

/// Parses a path string that is assumed to be in dot style.
///
/// Dot style cannot distinguish a mapping key from a named-list entry name
/// without the document, so non-numeric segments are parsed as
/// [`Section::Undetermined`] and resolved during Get/Set/Delete.
pub fn parse_dot_style(input: &str) -> Result<Path, Error> {
    let (prefix, remainder) = split_document_index(input);
    let doc_idx = parse_document_index(prefix, PathStyle::DotStyle, input)?;

    if remainder.is_empty() {
        return Ok(Path::for_document(doc_idx));
    }

    let mut sections = Vec::new();
    for segment in remainder.split('.') {
        match segment.parse::<i64>() {
            Ok(idx) => sections.push(Section::index(idx)),
            Err(_) => sections.push(Section::Undetermined(segment.to_string())),
        }
    }

    Ok(Path::new(doc_idx, sections))
}

/// Splits an optional `N:` document index prefix off the path string. The
/// prefix is only recognized when everything before the colon is a digit.
fn split_document_index(input: &str) -> (Option<&str>, &str) {
    if let Some(pos) = input.find(':') {
        let prefix = &input[..pos];
        if !prefix.is_empty() && prefix.chars().all(|c| c.is_ascii_digit()) {
            return (Some(prefix), &input[pos + 1..]);
        }
    }

    (None, input)
}

fn parse_document_index(
    prefix: Option<&str>,
    style: PathStyle,
    input: &str,
) -> Result<usize, Error> {
    match prefix {
        None => Ok(0),
        Some(digits) => digits.parse::<usize>().map_err(|_| Error::InvalidPath {
            style,
            path: input.to_string(),
            reason: format!(
                "failed to parse path string, cannot parse document index: {}",
                digits
            ),
        }),
    }
}

/// Splits on the separator while honoring backslash escapes, so that `\/`
/// inside a token does not start a new one. The escape is decoded in the
/// returned tokens; any other backslash sequence is kept verbatim.
fn split_unescaped(input: &str, separator: char) -> Vec<String> {
    let mut tokens = Vec::new();
    let mut current = String::new();
    let mut chars = input.chars();

    while let Some(c) = chars.next() {
        if c == '\\' {
            match chars.next() {
                Some(next) if next == separator => current.push(next),
                Some(next) => {
                    current.push('\\');
                    current.push(next);
                }
                None => current.push('\\'),
            }
        } else if c == separator {
            tokens.push(std::mem::take(&mut current));
        } else {
            current.push(c);
        }
    }

    tokens.push(current);
    tokens
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_dot_style_maps_only() {
        let path = parse_dot_style("yaml.structure.somekey").unwrap();
        assert_eq!(path.dot_style(), "yaml.structure.somekey");
        assert_eq!(path.go_patch_style(), "/yaml/structure/somekey");
    }

    #[test]
    fn test_parse_dot_style_with_list_index() {
        let path = parse_dot_style("simpleList.1").unwrap();
        assert_eq!(path.dot_style(), "simpleList.1");
        assert_eq!(path.go_patch_style(), "/simpleList/1");
    }

    #[test]
    fn test_parse_dot_style_root_is_empty_string() {
        let path = parse_dot_style("").unwrap();
        assert!(path.is_root());
    }

    #[test]
    fn test_parse_go_patch_maps_only() {
        let path = parse_go_patch_style("/yaml/structure/somekey").unwrap();
        assert_eq!(path.dot_style(), "yaml.structure.somekey");
        assert_eq!(path.go_patch_style(), "/yaml/structure/somekey");
    }

    #[test]
    fn test_parse_go_patch_with_named_entry() {
        let path = parse_go_patch_style("/list/name=one/somekey").unwrap();
        assert_eq!(path.dot_style(), "list.one.somekey");
        assert_eq!(path.go_patch_style(), "/list/name=one/somekey");
    }

    #[test]
    fn test_parse_go_patch_with_list_index() {
        let path = parse_go_patch_style("/simpleList/1").unwrap();
        assert_eq!(path.sections(), &[Section::field("simpleList"), Section::index(1)]);
    }

    #[test]
    fn test_parse_go_patch_root() {
        let path = parse_go_patch_style("/").unwrap();
        assert!(path.is_root());
        assert_eq!(path.go_patch_style(), "/");
        assert_eq!(path.dot_style(), "(root)");
    }

    #[test]
    fn test_parse_go_patch_mixed_types() {
        let path = parse_go_patch_style(
            "/resource_pools/name=concourse_resource_pool/cloud_properties/datacenters/0/clusters",
        )
        .unwrap();
        assert_eq!(
            path.dot_style(),
            "resource_pools.concourse_resource_pool.cloud_properties.datacenters.0.clusters"
        );
        assert_eq!(
            path.go_patch_style(),
            "/resource_pools/name=concourse_resource_pool/cloud_properties/datacenters/0/clusters"
        );
    }

    #[test]
    fn test_parse_go_patch_with_escaped_slashes() {
        let path = parse_go_patch_style("/foo/name=bar.com\\/id/string").unwrap();
        assert_eq!(
            path.sections(),
            &[
                Section::field("foo"),
                Section::named("name", "bar.com/id"),
                Section::field("string"),
            ]
        );
        assert_eq!(path.dot_style(), "foo.bar.com/id.string");
    }

    #[test]
    fn test_parse_go_patch_with_document_index() {
        let path = parse_go_patch_style("1:/yaml").unwrap();
        assert_eq!(path.document_idx(), 1);
        assert_eq!(path.go_patch_style(), "/yaml");
    }

    #[test]
    fn test_parse_dot_style_with_document_index() {
        let path = parse_dot_style("2:yaml.map").unwrap();
        assert_eq!(path.document_idx(), 2);
        assert_eq!(path.dot_style(), "yaml.map");
    }

    #[test]
    fn test_parse_go_patch_rejects_missing_slash() {
        let err = parse_go_patch_style("yaml/map").unwrap_err();
        assert!(matches!(err, Error::InvalidPath { .. }));
    }

    #[test]
    fn test_auto_detection() {
        assert_eq!(
            parse_path("/yaml/map").unwrap().sections(),
            parse_go_patch_style("/yaml/map").unwrap().sections()
        );
        assert_eq!(
            parse_path("yaml.map").unwrap().sections(),
            parse_dot_style("yaml.map").unwrap().sections()
        );
        assert_eq!(
            parse_path("1:/yaml").unwrap().document_idx(),
            1
        );
    }

    #[test]
    fn test_negative_index_is_parsed_as_index() {
        let path = parse_go_patch_style("/list/-1").unwrap();
        assert_eq!(path.sections(), &[Section::field("list"), Section::index(-1)]);
    }

    #[test]
    fn test_integer_token_is_always_an_index() {
        let path = parse_go_patch_style("/map/42").unwrap();
        assert_eq!(path.sections(), &[Section::field("map"), Section::index(42)]);
    }

    #[test]
    fn test_round_trip_go_patch_rendering() {
        for input in [
            "/yaml/structure/somekey",
            "/list/name=one/somekey",
            "/simpleList/1",
            "/foo/name=bar.com\\/id/string",
            "/",
        ] {
            let path = parse_go_patch_style(input).unwrap();
            assert_eq!(path.go_patch_style(), input);
            assert_eq!(parse_go_patch_style(&path.go_patch_style()).unwrap(), path);
        }
    }
}
