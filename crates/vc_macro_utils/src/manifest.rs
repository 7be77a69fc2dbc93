use std::collections::BTreeMap;
use std::env;
use std::path::{Path, PathBuf};
use std::sync::{PoisonError, RwLock};
use std::time::SystemTime;

use toml_edit::{Document, Item, Table};

/// The caller's `Cargo.toml`, used to find how a workspace crate is reachable
/// from the code a derive emits.
///
/// # Example
///
/// ```rust
/// # use vc_macro_utils::Manifest;
/// let path: syn::Path = Manifest::shared(|m| m.get_crate_path("vc_mapper"));
/// ```
///
/// Reading and parsing the manifest is not free: call this once per macro
/// invocation and reuse the path.
///
/// # Resolution rules
///
/// Sections are searched in the order `dependencies`, `dev-dependencies`,
/// then every `target.*.dependencies` table.
///
/// 1. A dependency keyed `name`, or renamed with `package = "name"`, gives
///    `::key`.
/// 2. For a `vc_` crate, a dependency on the facade crate `vc_mapping` gives
///    `::vc_mapping::short_name` (`vc_mapper` → `::vc_mapping::mapper`).
/// 3. Otherwise the absolute path `::name` is returned.
///
/// ## Note
/// A crate deriving on its own types resolves to `::name` through rule 3; it
/// needs `extern crate self as name;` at its root.
#[derive(Debug)]
pub struct Manifest {
    pub manifest: Document<Box<str>>,
    pub modified_time: SystemTime,
}

const FACADE_NAME: &str = "vc_mapping";
const CRATE_PREFIX: &str = "vc_";

impl Manifest {
    #[inline(never)]
    fn manifest_path() -> PathBuf {
        let Some(dir) = env::var_os("CARGO_MANIFEST_DIR") else {
            panic!("CARGO_MANIFEST_DIR is not set, the derive must run under cargo");
        };
        let path = PathBuf::from(dir).join("Cargo.toml");
        assert!(path.exists(), "no Cargo.toml at {}", path.display());
        path
    }

    #[inline(never)]
    fn modified_time(path: &Path) -> Result<SystemTime, std::io::Error> {
        std::fs::metadata(path).and_then(|metadata| metadata.modified())
    }

    #[inline(never)]
    fn read_manifest(path: &Path) -> Document<Box<str>> {
        let text = std::fs::read_to_string(path)
            .unwrap_or_else(|error| panic!("cannot read {}: {error}", path.display()))
            .into_boxed_str();
        Document::parse(text)
            .unwrap_or_else(|error| panic!("cannot parse {}: {error}", path.display()))
    }

    fn absolute_path(segments: &[&str]) -> syn::Path {
        let mut path = String::new();
        for segment in segments {
            path.push_str("::");
            path.push_str(segment);
        }
        syn::parse_str(&path).unwrap_or_else(|_| panic!("`{path}` is not a valid path"))
    }

    /// The key under which `name` is declared in `deps`, honoring renames.
    fn dependency_key<'a>(deps: &'a Table, name: &str) -> Option<&'a str> {
        if let Some((key, _)) = deps.get_key_value(name) {
            return Some(key.get());
        }
        deps.iter().find_map(|(key, item)| {
            let package = item.as_table_like()?.get("package")?.as_str()?;
            (package == name).then_some(key)
        })
    }

    fn find_in_deps(deps: &Table, name: &str) -> Option<syn::Path> {
        if let Some(key) = Self::dependency_key(deps, name) {
            return Some(Self::absolute_path(&[&key.replace('-', "_")]));
        }
        let module = name.strip_prefix(CRATE_PREFIX)?;
        let facade = Self::dependency_key(deps, FACADE_NAME)?;
        Some(Self::absolute_path(&[&facade.replace('-', "_"), module]))
    }

    fn dependency_tables(&self) -> impl Iterator<Item = &Table> {
        let top = ["dependencies", "dev-dependencies"]
            .into_iter()
            .filter_map(|section| self.manifest.get(section)?.as_table());

        let targets = self
            .manifest
            .get("target")
            .and_then(Item::as_table_like)
            .into_iter()
            .flat_map(|targets| targets.iter())
            .filter_map(|(_, target)| target.as_table_like()?.get("dependencies")?.as_table());

        top.chain(targets)
    }

    /// Returns the path of the crate `name` as seen from the caller.
    ///
    /// See the type documentation for the resolution order.
    #[inline(never)]
    pub fn get_crate_path(&self, name: &str) -> syn::Path {
        self.dependency_tables()
            .find_map(|deps| Self::find_in_deps(deps, name))
            .unwrap_or_else(|| Self::absolute_path(&[name]))
    }

    /// Runs `func` with the caller's manifest.
    ///
    /// Manifests are cached per path and reparsed when the file changes.
    pub fn shared<R>(func: impl FnOnce(&Self) -> R) -> R {
        static MANIFESTS: RwLock<BTreeMap<PathBuf, Manifest>> = RwLock::new(BTreeMap::new());

        let path = Self::manifest_path();
        let modified_time = Self::modified_time(&path)
            .unwrap_or_else(|error| panic!("cannot stat {}: {error}", path.display()));

        {
            let manifests = MANIFESTS.read().unwrap_or_else(PoisonError::into_inner);
            if let Some(manifest) = manifests.get(&path)
                && manifest.modified_time == modified_time
            {
                return func(manifest);
            }
        }

        let manifest = Manifest {
            manifest: Self::read_manifest(&path),
            modified_time,
        };
        let result = func(&manifest);

        MANIFESTS
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(path, manifest);

        result
    }
}

#[cfg(test)]
mod tests {
    use std::time::SystemTime;

    use toml_edit::Document;

    use super::Manifest;

    fn path_string(path: &syn::Path) -> String {
        let segments: Vec<String> = path.segments.iter().map(|s| s.ident.to_string()).collect();
        let prefix = if path.leading_colon.is_some() { "::" } else { "" };
        format!("{prefix}{}", segments.join("::"))
    }

    fn manifest(text: &str) -> Manifest {
        Manifest {
            manifest: Document::parse(Box::<str>::from(text)).unwrap(),
            modified_time: SystemTime::UNIX_EPOCH,
        }
    }

    #[test]
    fn direct_dependency() {
        let m = manifest("[dependencies]\nvc_mapper = \"0.1\"\n");
        assert_eq!(path_string(&m.get_crate_path("vc_mapper")), "::vc_mapper");
    }

    #[test]
    fn renamed_dependency() {
        let m = manifest("[dependencies]\nmapper = { package = \"vc_mapper\", version = \"0.1\" }\n");
        assert_eq!(path_string(&m.get_crate_path("vc_mapper")), "::mapper");
    }

    #[test]
    fn through_facade() {
        let m = manifest("[dev-dependencies]\nvc_mapping = { path = \"..\" }\n");
        assert_eq!(path_string(&m.get_crate_path("vc_mapper")), "::vc_mapping::mapper");
    }

    #[test]
    fn target_specific_dependency() {
        let m = manifest("[target.'cfg(unix)'.dependencies]\nvc_mapper = \"0.1\"\n");
        assert_eq!(path_string(&m.get_crate_path("vc_mapper")), "::vc_mapper");
    }

    #[test]
    fn direct_dependency_wins_over_facade() {
        let m = manifest("[dependencies]\nvc_mapping = \"0.1\"\nvc_mapper = \"0.1\"\n");
        assert_eq!(path_string(&m.get_crate_path("vc_mapper")), "::vc_mapper");
        assert_eq!(path_string(&m.get_crate_path("vc_mapping")), "::vc_mapping");
    }

    #[test]
    fn falls_back_to_absolute_path() {
        let m = manifest("[package]\nname = \"vc_mapper\"\n");
        assert_eq!(path_string(&m.get_crate_path("vc_mapper")), "::vc_mapper");
    }
}
