//! Filename checks based on dot-separated components.
//!
//! Two checks exist and they deliberately look at different indices:
//! the candidate filter reads component 1 of the bare filename, while
//! program validation reads component 2 of the program path (directory
//! joined with filename). For `./foo.rpal.rpal` both agree; for a bare
//! `foo.rpal` or `foo.rpal.txt` they do not.
use crate::types::Validation;

pub const DEFAULT_EXTENSION: &str = "rpal";

/// Component `index` of `name` split on `.`, if present.
pub fn dot_component(name: &str, index: usize) -> Option<&str> {
    name.split('.').nth(index)
}

/// True when the second dot component of `filename` equals `extension`.
pub fn is_candidate(filename: &str, extension: &str) -> bool {
    dot_component(filename, 1) == Some(extension)
}

/// Validate a program path by its third dot component.
/// A missing component counts as a mismatch.
pub fn validate_program(path: &str, extension: &str) -> Validation {
    match dot_component(path, 2) {
        Some(component) if component == extension => Validation::Program,
        _ => Validation::NotRpal,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_without_second_component_are_not_candidates() {
        assert!(!is_candidate("Makefile", DEFAULT_EXTENSION));
        assert!(!is_candidate("", DEFAULT_EXTENSION));
        assert_eq!(dot_component("Makefile", 1), None);
    }

    #[test]
    fn candidate_filter_reads_second_component() {
        assert!(is_candidate("foo.rpal", DEFAULT_EXTENSION));
        assert!(is_candidate("foo.rpal.rpal", DEFAULT_EXTENSION));
        assert!(is_candidate("foo.rpal.txt", DEFAULT_EXTENSION));
        assert!(!is_candidate("foo.txt.rpal", DEFAULT_EXTENSION));
        assert!(!is_candidate("foo.RPAL", DEFAULT_EXTENSION));
        // Leading dot shifts the components.
        assert!(!is_candidate(".foo.rpal", DEFAULT_EXTENSION));
        assert!(is_candidate(".rpal", DEFAULT_EXTENSION));
    }

    #[test]
    fn validation_reads_third_component() {
        assert_eq!(validate_program("foo.rpal.rpal", DEFAULT_EXTENSION), Validation::Program);
        assert_eq!(validate_program("foo.rpal.txt", DEFAULT_EXTENSION), Validation::NotRpal);
        assert_eq!(validate_program("foo.rpal", DEFAULT_EXTENSION), Validation::NotRpal);
    }

    #[test]
    fn validation_of_dot_relative_paths_matches_candidate_filter() {
        // "./name" adds an empty leading component, so index 2 of the path is
        // index 1 of the filename.
        assert!(validate_program("./foo.rpal", DEFAULT_EXTENSION).is_program());
        assert!(validate_program("./foo.rpal.txt", DEFAULT_EXTENSION).is_program());
        assert!(!validate_program("./foo.txt", DEFAULT_EXTENSION).is_program());
    }

    #[test]
    fn custom_extension() {
        assert!(is_candidate("prog.rp.rp", "rp"));
        assert!(validate_program("prog.rp.rp", "rp").is_program());
        assert!(!validate_program("prog.rp.rpal", "rp").is_program());
    }
}
