//! Verifies the src tree and the tests/unit tree mirror each other

#[cfg(test)]
mod tests {
    use std::collections::HashSet;
    use std::fs;
    use std::path::Path;

    fn collect_relative_paths(root: &Path, dir: &Path, paths: &mut HashSet<String>) {
        let Ok(entries) = fs::read_dir(dir) else {
            return;
        };

        for entry in entries.flatten() {
            let path = entry.path();
            if path.is_dir() {
                collect_relative_paths(root, &path, paths);
            } else if let Ok(relative) = path.strip_prefix(root) {
                paths.insert(relative.to_string_lossy().replace('\\', "/"));
            }
        }
    }

    // Entry points and module organization files need no separate test file
    fn requires_counterpart(path: &str) -> bool {
        path != "main.rs" && path != "lib.rs" && !path.ends_with("mod.rs")
    }

    fn tree(root: &str) -> HashSet<String> {
        let mut paths = HashSet::new();
        collect_relative_paths(Path::new(root), Path::new(root), &mut paths);
        paths.retain(|path| requires_counterpart(path));
        paths
    }

    // Tests every source file has a unit test counterpart and vice versa
    // Verified by adding a source file without a matching test file
    #[test]
    fn test_src_and_unit_trees_mirror() {
        let src_paths = tree("src");
        let unit_paths = tree("tests/unit");

        assert!(!src_paths.is_empty(), "src tree was not found");

        let mut missing: Vec<&String> = src_paths.difference(&unit_paths).collect();
        missing.sort();
        assert!(
            missing.is_empty(),
            "source files missing unit test counterparts: {missing:?}"
        );

        let mut orphaned: Vec<&String> = unit_paths.difference(&src_paths).collect();
        orphaned.sort();
        assert!(
            orphaned.is_empty(),
            "unit test files without source counterparts: {orphaned:?}"
        );
    }
}
