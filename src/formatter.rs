//! Identifier formatting helpers.
//! Turns free-form user input into the slug, type name and package name
//! used by the templates.

/// Normalizes raw input into a path-safe project slug.
///
/// Lowercases the input, replaces every character outside `[a-z0-9-]` with
/// `-`, collapses runs of `-` and trims them from both ends.
///
/// # Examples
/// ```
/// use create_halo_plugin::formatter::format_slug;
///
/// assert_eq!(format_slug("My Awesome_Plugin!"), "my-awesome-plugin");
/// ```
pub fn format_slug(raw: &str) -> String {
    let mut slug = String::with_capacity(raw.len());
    for c in raw.to_lowercase().chars() {
        let c = if c.is_ascii_lowercase() || c.is_ascii_digit() { c } else { '-' };
        if c == '-' && slug.ends_with('-') {
            continue;
        }
        slug.push(c);
    }
    slug.trim_matches('-').to_string()
}

/// Builds the PascalCase type name from a hyphenated name.
///
/// # Examples
/// ```
/// use create_halo_plugin::formatter::format_type_name;
///
/// assert_eq!(format_type_name("my-awesome-plugin"), "MyAwesomePlugin");
/// ```
pub fn format_type_name(raw: &str) -> String {
    capitalize_segments(raw.split('-'))
}

/// Joins the domain with the slug stripped of hyphens.
///
/// # Examples
/// ```
/// use create_halo_plugin::formatter::format_package_name;
///
/// assert_eq!(format_package_name("com.example", "my-plugin"), "com.example.myplugin");
/// ```
pub fn format_package_name(domain: &str, slug: &str) -> String {
    let package_segment = slug.replace('-', "").to_lowercase();
    format!("{}.{}", domain, package_segment)
}

/// Keeps only lowercase ASCII letters and digits.
pub fn to_valid_package_name(raw: &str) -> String {
    raw.to_lowercase().chars().filter(|c| c.is_ascii_lowercase() || c.is_ascii_digit()).collect()
}

/// Like [`format_type_name`], but also splits on underscores and whitespace.
pub fn to_valid_class_name(raw: &str) -> String {
    capitalize_segments(raw.split(|c: char| c == '-' || c == '_' || c.is_whitespace()))
}

fn capitalize_segments<'a>(segments: impl Iterator<Item = &'a str>) -> String {
    segments
        .filter(|segment| !segment.is_empty())
        .map(|segment| {
            let mut chars = segment.chars();
            match chars.next() {
                Some(first) => first
                    .to_uppercase()
                    .chain(chars.as_str().to_lowercase().chars())
                    .collect::<String>(),
                None => String::new(),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_slug() {
        assert_eq!(format_slug("my-plugin"), "my-plugin");
        assert_eq!(format_slug("My Plugin"), "my-plugin");
        assert_eq!(format_slug("--my__plugin--"), "my-plugin");
        assert_eq!(format_slug("plugin.v2"), "plugin-v2");
        assert_eq!(format_slug("Ünïcode"), "n-code");
        assert_eq!(format_slug(""), "");
        assert_eq!(format_slug("!!!"), "");
    }

    #[test]
    fn test_format_slug_is_idempotent() {
        for raw in ["my-plugin", "a.b-c", "Hello World", "x--y", "0-0"] {
            let once = format_slug(raw);
            assert_eq!(format_slug(&once), once);
        }
    }

    #[test]
    fn test_format_type_name() {
        assert_eq!(format_type_name("my-awesome-plugin"), "MyAwesomePlugin");
        assert_eq!(format_type_name("PLUGIN"), "Plugin");
        assert_eq!(format_type_name("a--b"), "AB");
        assert_eq!(format_type_name("v2-api"), "V2Api");
        assert_eq!(format_type_name(""), "");
    }

    #[test]
    fn test_format_package_name() {
        assert_eq!(format_package_name("com.example", "my-plugin"), "com.example.myplugin");
        assert_eq!(format_package_name("run.halo", "Links"), "run.halo.links");
    }

    #[test]
    fn test_lenient_helpers() {
        assert_eq!(to_valid_package_name("My-Plugin_2"), "myplugin2");
        assert_eq!(to_valid_class_name("my_awesome plugin"), "MyAwesomePlugin");
        assert_eq!(to_valid_class_name("  spaced--out "), "SpacedOut");
    }
}
