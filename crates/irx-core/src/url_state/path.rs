//! Path-segment state: `components/<types>/<focus>/<query>`.
//!
//! Each reader builds its prefix from the readers before it, so focus types
//! are only found after the exact component list, and the search query only
//! after both. Prefixes match literally: the title-cased component list must
//! appear as-is in the href for focus types and search query to be found.

const COMPONENTS: &str = "components/";
const TIREX: &str = "tirex";

/// The path segment following the first literal `prefix`, up to the next `/`, `?` or `#`.
fn segment_after<'a>(href: &'a str, prefix: &str) -> Option<&'a str> {
    let at = href.find(prefix)?;
    let rest = &href[at + prefix.len()..];
    let end = rest.find(['/', '?', '#']).unwrap_or(rest.len());
    Some(&rest[..end])
}

fn title_case(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

fn proper_noun(s: String) -> String {
    let at = s
        .as_bytes()
        .windows(TIREX.len())
        .position(|w| w.eq_ignore_ascii_case(TIREX.as_bytes()));
    match at {
        Some(at) => format!("{}TIREx{}", &s[..at], &s[at + TIREX.len()..]),
        None => s,
    }
}

/// Lower-cases, splits on `,` and title-cases. A lone empty segment means no selection.
fn split_types(segment: &str) -> Vec<String> {
    let types: Vec<String> = segment.to_lowercase().split(',').map(title_case).collect();
    if types.len() == 1 && types[0].is_empty() {
        Vec::new()
    } else {
        types
    }
}

/// Component types selected in `href`, e.g. `components/tirex,foo/` gives `["TIREx", "Foo"]`.
pub fn extract_component_types(href: &str) -> Vec<String> {
    segment_after(href, COMPONENTS)
        .map(|segment| split_types(segment).into_iter().map(proper_noun).collect())
        .unwrap_or_default()
}

/// Focus types: the segment after `components/<component types>/`.
pub fn extract_focus_types(href: &str) -> Vec<String> {
    let prefix = format!("{}{}/", COMPONENTS, extract_component_types(href).join(","));
    segment_after(href, &prefix)
        .map(split_types)
        .unwrap_or_default()
}

/// Search query: the segment after `components/<types>/<focus>/`, with `%20` as spaces, lower-cased.
pub fn extract_search_query(href: &str) -> String {
    let prefix = format!(
        "{}{}/{}/",
        COMPONENTS,
        extract_component_types(href).join(","),
        extract_focus_types(href).join(",")
    );
    segment_after(href, &prefix)
        .map(|q| q.replace("%20", " ").to_lowercase())
        .unwrap_or_default()
}
