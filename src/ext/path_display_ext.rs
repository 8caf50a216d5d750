use std::path::{self, Component, Path, PathBuf};

/// Renders a path as absolute and lexically normalized, without touching
/// the filesystem, so paths that do not exist yet display the same way as
/// the ones that do.
pub fn absolute_display(path: &Path) -> String {
    let absolute = path::absolute(path).unwrap_or_else(|_| path.to_path_buf());
    normalize(&absolute).display().to_string()
}

fn normalize(path: &Path) -> PathBuf {
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

pub trait PathDisplayExt {
    fn absolute_display(&self) -> String;
}

impl<P: AsRef<Path> + ?Sized> PathDisplayExt for P {
    fn absolute_display(&self) -> String {
        absolute_display(self.as_ref())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::*;

    #[rstest]
    #[case("/tmp/x/./a", "/tmp/x/a")]
    #[case("/tmp/x/a/../b", "/tmp/x/b")]
    #[case("/tmp/../../etc", "/etc")]
    #[case("/", "/")]
    fn test_absolute_display_normalizes(#[case] input: &str, #[case] expected: &str) {
        assert_eq!(Path::new(input).absolute_display(), expected);
    }

    #[test]
    fn test_absolute_display_resolves_relative_paths() {
        let current_dir = std::env::current_dir().expect("Failed to get current dir");
        let displayed = "src/assets".absolute_display();
        assert_eq!(displayed, current_dir.join("src/assets").display().to_string());
    }
}
