use std::path::{Component, Path, PathBuf};

/// Renders a path for messages: canonical if it exists, otherwise made
/// absolute against the current directory with `.` and `..` folded away.
pub fn absolute_display(path: &Path) -> String {
    if let Ok(canonical) = path.canonicalize() {
        return canonical.display().to_string();
    }

    let absolute = std::path::absolute(path).unwrap_or_else(|_| path.to_path_buf());
    lexically_normalize(&absolute).display().to_string()
}

fn lexically_normalize(path: &Path) -> PathBuf {
    path.components()
        .fold(Vec::new(), |mut components, component| {
            match component {
                Component::CurDir => {}
                Component::ParentDir => match components.last() {
                    Some(Component::Normal(_)) => {
                        components.pop();
                    }
                    Some(Component::RootDir | Component::Prefix(_)) => {}
                    _ => components.push(component),
                },
                _ => components.push(component),
            }
            components
        })
        .iter()
        .collect()
}

pub trait AbsolutePathExt {
    fn absolute_display(&self) -> String;
}

impl<P: AsRef<Path> + ?Sized> AbsolutePathExt for P {
    fn absolute_display(&self) -> String {
        absolute_display(self.as_ref())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::*;
    use tempfile::TempDir;

    #[rstest]
    #[case("/a/b/../c", "/a/c")]
    #[case("/a/./b/.", "/a/b")]
    #[case("/../a", "/a")]
    #[case("a/../../b", "../b")]
    fn lexically_normalize_folds_dots(#[case] input: &str, #[case] expected: &str) {
        assert_eq!(lexically_normalize(Path::new(input)), PathBuf::from(expected));
    }

    #[test]
    fn existing_path_is_canonicalized() {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        let dotted = temp_dir.path().join(".");

        let canonical = temp_dir
            .path()
            .canonicalize()
            .expect("Failed to canonicalize temp directory");

        assert_eq!(dotted.absolute_display(), canonical.display().to_string());
    }

    #[test]
    fn missing_path_is_made_absolute() {
        let displayed = "missing/../still-missing".absolute_display();

        assert!(Path::new(&displayed).is_absolute());
        assert!(displayed.ends_with("still-missing"));
        assert!(!displayed.contains(".."));
    }
}
