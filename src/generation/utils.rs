//! Identifier and path helpers for generated Java sources

use std::path::{Path, PathBuf};

use crate::generation::GeneratedType;

/// Upper-cases the first character and leaves the rest untouched.
///
/// Converting a lowerCamel identifier to UpperCamel only changes its first
/// character, so this doubles as the operation id to type name conversion.
///
/// # Examples
/// ```
/// use service_creator::generation::utils::to_upper_camel_case;
///
/// assert_eq!(to_upper_camel_case("getPetById"), "GetPetById");
/// assert_eq!(to_upper_camel_case("firstName"), "FirstName");
/// ```
pub fn to_upper_camel_case(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        None => String::new(),
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
    }
}

/// Name of the getter for a field: `get` followed by the capitalised field name.
///
/// # Examples
/// ```
/// use service_creator::generation::utils::accessor_name;
///
/// assert_eq!(accessor_name("firstName"), "getFirstName");
/// ```
pub fn accessor_name(field_name: &str) -> String {
    format!("get{}", to_upper_camel_case(field_name))
}

/// Turns an identifier into a human readable label.
///
/// A space is inserted at every position between two characters that matches
/// one of three boundaries:
/// - an uppercase letter followed by an uppercase letter and a lowercase letter
///   (`HTTPServer` splits before `S`)
/// - anything but an uppercase letter followed by an uppercase letter
/// - a letter followed by anything but a letter
///
/// Only ASCII letters count as letters.
///
/// # Examples
/// ```
/// use service_creator::generation::utils::readable_label;
///
/// assert_eq!(readable_label("userId"), "user Id");
/// assert_eq!(readable_label("HTTPServer2Name"), "HTTP Server 2 Name");
/// ```
pub fn readable_label(identifier: &str) -> String {
    let chars: Vec<char> = identifier.chars().collect();
    let mut label = String::with_capacity(identifier.len() + 4);

    for (i, &ch) in chars.iter().enumerate() {
        if i > 0 && is_label_boundary(chars[i - 1], ch, chars.get(i + 1).copied()) {
            label.push(' ');
        }
        label.push(ch);
    }

    label
}

fn is_label_boundary(prev: char, current: char, next: Option<char>) -> bool {
    let acronym_end = prev.is_ascii_uppercase()
        && current.is_ascii_uppercase()
        && next.is_some_and(|n| n.is_ascii_lowercase());
    let camel_hump = !prev.is_ascii_uppercase() && current.is_ascii_uppercase();
    let letter_end = prev.is_ascii_alphabetic() && !current.is_ascii_alphabetic();

    acronym_end || camel_hump || letter_end
}

/// Relative directory for a dotted package name (`com.example` -> `com/example`)
pub fn package_dir(package: &str) -> PathBuf {
    package.split('.').filter(|s| !s.is_empty()).collect()
}

/// File for a top-level declaration under a source root, laid out by package
pub fn source_path(source_root: &Path, declaration: &GeneratedType, extension: &str) -> PathBuf {
    let dir = match &declaration.package {
        Some(package) => source_root.join(package_dir(package)),
        None => source_root.to_path_buf(),
    };
    dir.join(format!("{}.{extension}", declaration.name))
}
