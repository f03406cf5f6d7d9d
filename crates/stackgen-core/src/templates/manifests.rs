//! Manifest rendering: package.json, deno.json and browser import maps

use super::fileset::Manifest;
use crate::error::{Result, ScaffoldError};
use serde::Serialize;
use std::collections::BTreeMap;

fn to_json<T: Serialize>(path: &str, value: &T) -> Result<String> {
    serde_json::to_string_pretty(value)
        .map(|json| json + "\n")
        .map_err(|source| ScaffoldError::Serialize {
            path: path.to_string(),
            source,
        })
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct PackageJson<'a> {
    name: &'a str,
    private: bool,
    version: &'static str,
    #[serde(rename = "type")]
    module_type: &'static str,
    scripts: &'a BTreeMap<&'static str, String>,
    dependencies: &'a Manifest,
    dev_dependencies: &'a Manifest,
}

/// Render `package.json` for a Vite project
pub(crate) fn package_json(
    name: &str,
    scripts: &BTreeMap<&'static str, String>,
    dependencies: &Manifest,
    dev_dependencies: &Manifest,
) -> Result<String> {
    to_json(
        "package.json",
        &PackageJson {
            name,
            private: true,
            version: "0.0.0",
            module_type: "module",
            scripts,
            dependencies,
            dev_dependencies,
        },
    )
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct DenoJson<'a> {
    tasks: &'a BTreeMap<&'static str, String>,
    imports: BTreeMap<String, String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    compiler_options: Option<CompilerOptions>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct CompilerOptions {
    jsx: &'static str,
    jsx_import_source: &'static str,
}

/// Deno import specifier for a manifest entry: versions that already are a URL
/// or a registry specifier are used as-is, everything else comes from npm
pub(crate) fn deno_specifier(name: &str, version: &str) -> String {
    let is_specifier = ["http://", "https://", "npm:", "jsr:"]
        .iter()
        .any(|prefix| version.starts_with(prefix));
    if is_specifier {
        version.to_string()
    } else {
        format!("npm:{}@{}", name, version)
    }
}

/// Render `deno.json`; every entry of `imports` is mapped through [`deno_specifier`]
pub(crate) fn deno_json<'m>(
    tasks: &BTreeMap<&'static str, String>,
    imports: impl IntoIterator<Item = &'m Manifest>,
    preact: bool,
) -> Result<String> {
    let imports = imports
        .into_iter()
        .flat_map(Manifest::iter)
        .map(|(name, version)| (name.to_string(), deno_specifier(name, version)))
        .collect();
    let compiler_options = preact.then_some(CompilerOptions {
        jsx: "react-jsx",
        jsx_import_source: "preact",
    });
    to_json(
        "deno.json",
        &DenoJson {
            tasks,
            imports,
            compiler_options,
        },
    )
}

#[derive(Serialize)]
struct ImportMap {
    imports: BTreeMap<String, String>,
}

/// Render a browser import map resolving every dependency through esm.sh.
///
/// `vue` maps to its full browser build (which includes the template
/// compiler); every other package keeps `vue` external and gets a `name/`
/// prefix entry for subpath imports.
pub(crate) fn import_map(dependencies: &Manifest) -> Result<String> {
    let mut imports = BTreeMap::new();
    for (name, version) in dependencies.iter() {
        let version = version.trim_start_matches(['^', '~']);
        if name == "vue" {
            imports.insert(
                name.to_string(),
                format!("https://esm.sh/vue@{}/dist/vue.esm-browser.js", version),
            );
        } else {
            imports.insert(
                name.to_string(),
                format!("https://esm.sh/{}@{}?external=vue", name, version),
            );
            imports.insert(
                format!("{}/", name),
                format!("https://esm.sh/{}@{}&external=vue/", name, version),
            );
        }
    }
    to_json("index.html", &ImportMap { imports })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Value;

    fn manifest(entries: &[(&str, &str)]) -> Manifest {
        let mut manifest = Manifest::new();
        for (name, version) in entries {
            manifest.insert(*name, *version);
        }
        manifest
    }

    #[test]
    fn test_package_json_shape() {
        let scripts = BTreeMap::from([("dev", "vite".to_string())]);
        let json = package_json(
            "react-node-app",
            &scripts,
            &manifest(&[("react", "^18.2.0")]),
            &manifest(&[("vite", "^5.1.6")]),
        )
        .unwrap();
        let value: Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["name"], "react-node-app");
        assert_eq!(value["type"], "module");
        assert_eq!(value["scripts"]["dev"], "vite");
        assert_eq!(value["dependencies"]["react"], "^18.2.0");
        assert_eq!(value["devDependencies"]["vite"], "^5.1.6");
        assert!(json.ends_with("}\n"));
    }

    #[test]
    fn test_deno_specifiers() {
        assert_eq!(deno_specifier("zod", "^3.22.4"), "npm:zod@^3.22.4");
        assert_eq!(deno_specifier("@std/http", "jsr:@std/http@^1.0.0"), "jsr:@std/http@^1.0.0");
        assert_eq!(
            deno_specifier("preact", "https://esm.sh/preact@10.19.6"),
            "https://esm.sh/preact@10.19.6"
        );
    }

    #[test]
    fn test_deno_json_merges_sections() {
        let tasks = BTreeMap::from([("start", "deno run -A dev.ts".to_string())]);
        let runtime = manifest(&[("zod", "^3.22.4")]);
        let dev = manifest(&[("vitest", "^1.3.1")]);
        let json = deno_json(&tasks, [&runtime, &dev], true).unwrap();
        let value: Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["imports"]["zod"], "npm:zod@^3.22.4");
        assert_eq!(value["imports"]["vitest"], "npm:vitest@^1.3.1");
        assert_eq!(value["compilerOptions"]["jsxImportSource"], "preact");

        let json = deno_json(&tasks, [&runtime], false).unwrap();
        assert!(!json.contains("compilerOptions"));
    }

    #[test]
    fn test_import_map_uses_esm_sh() {
        let json = import_map(&manifest(&[("vue", "^3.4.21"), ("pinia", "^2.1.7")])).unwrap();
        let value: Value = serde_json::from_str(&json).unwrap();
        assert_eq!(
            value["imports"]["vue"],
            "https://esm.sh/vue@3.4.21/dist/vue.esm-browser.js"
        );
        assert_eq!(value["imports"]["pinia"], "https://esm.sh/pinia@2.1.7?external=vue");
        assert_eq!(value["imports"]["pinia/"], "https://esm.sh/pinia@2.1.7&external=vue/");
        assert!(value["imports"].get("vue/").is_none());
    }
}
