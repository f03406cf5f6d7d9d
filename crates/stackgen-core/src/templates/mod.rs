//! Template resolution: configuration in, FileSet out
//!
//! This module provides:
//! - One blueprint per (framework, runtime) quadrant
//! - Cross-axis wiring of the application entry point
//! - Manifest rendering (package.json, deno.json, import maps)
//! - The materializer that writes a FileSet to disk
//!
//! Resolution is pure: the same configuration always yields the same FileSet.

pub mod fileset;
pub mod materializer;
pub mod render;

mod fresh;
mod manifests;
mod snippets;
mod stores;
mod testing;
mod vite_react;
mod vite_vue;
mod vue_cdn;
mod wiring;

use crate::catalog::{ErrorHandlingLibrary, Package, Runtime, ValidationLibrary};
use crate::config::{Configuration, Quadrant};
use crate::error::Result;
use crate::report;

pub use fileset::{FileSet, GeneratedFile, Manifest};
pub use materializer::materialize;

/// Script language of the generated sources
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Lang {
    Ts,
    Js,
}

impl Lang {
    pub(crate) fn ext(self) -> &'static str {
        match self {
            Lang::Ts => "ts",
            Lang::Js => "js",
        }
    }
}

/// How generated modules import each other
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct ImportStyle {
    /// Suffix for imports of `.ts`/`.js` modules
    pub script_ext: &'static str,
    /// Suffix for imports of `.tsx` modules
    pub jsx_ext: &'static str,
    /// Whether a bundler resolves the imports (stylesheet imports need one)
    pub bundled: bool,
}

impl ImportStyle {
    pub(crate) const VITE: ImportStyle = ImportStyle {
        script_ext: "",
        jsx_ext: "",
        bundled: true,
    };

    pub(crate) const DENO: ImportStyle = ImportStyle {
        script_ext: ".ts",
        jsx_ext: ".tsx",
        bundled: false,
    };

    pub(crate) const BROWSER: ImportStyle = ImportStyle {
        script_ext: ".js",
        jsx_ext: ".js",
        bundled: false,
    };
}

/// Resolver for one quadrant
pub(crate) trait Blueprint {
    /// Manifests before any optional axis contributes
    fn base(&self, config: &Configuration) -> FileSet;

    /// Add every file of the project. The manifests are already merged.
    fn files(&self, config: &Configuration, set: &mut FileSet) -> Result<()>;
}

fn blueprint(quadrant: Quadrant) -> &'static dyn Blueprint {
    match quadrant {
        Quadrant::ViteReact => &vite_react::ViteReact,
        Quadrant::ViteVue => &vite_vue::ViteVue,
        Quadrant::Fresh => &fresh::Fresh,
        Quadrant::VueCdn => &vue_cdn::VueCdn,
    }
}

/// Resolve a configuration into the complete set of project files
pub fn resolve(config: &Configuration) -> Result<FileSet> {
    let blueprint = blueprint(config.quadrant());

    let mut set = blueprint.base(config);
    for contribution in config.contributions() {
        set.apply(&contribution);
    }

    blueprint.files(config, &mut set)?;
    set.add("README.md", report::readme(config)?);

    Ok(set)
}

/// The manifests a quadrant starts from, before optional axes are merged
pub fn base_manifests(config: &Configuration) -> (Manifest, Manifest) {
    let set = blueprint(config.quadrant()).base(config);
    (set.dependencies, set.dev_dependencies)
}

/// Build and lint tooling shared by both Vite blueprints
pub(crate) const VITE_TOOLING: &[Package] = &[
    Package { name: "vite", version: "^5.1.6" },
    Package { name: "typescript", version: "^5.4.2" },
    Package { name: "eslint", version: "^8.57.0" },
    Package { name: "@typescript-eslint/parser", version: "^7.2.0" },
    Package { name: "@typescript-eslint/eslint-plugin", version: "^7.2.0" },
    Package { name: "eslint-config-prettier", version: "^9.1.0" },
    Package { name: "prettier", version: "^3.2.5" },
];

/// Type definitions for the JavaScript runtime a Vite project runs on
pub(crate) fn runtime_types(runtime: Runtime) -> Package {
    match runtime {
        Runtime::Node => Package { name: "@types/node", version: "^20.11.28" },
        Runtime::Bun => Package { name: "@types/bun", version: "^1.0.8" },
        Runtime::Deno => unreachable!("deno projects are not built with Vite"),
    }
}

/// Lint, format and VCS ignore files of the Vite blueprints
pub(crate) fn add_tooling_files(set: &mut FileSet, eslintrc: &'static str) {
    set.add(".eslintrc.json", eslintrc);
    set.add(".prettierrc", asset!("common/prettierrc"));
    set.add(".gitignore", asset!("common/gitignore"));
}

/// Source of `userSchema`, exporting `UserSchema` and `validateUser`
pub(crate) fn validation_source(library: ValidationLibrary, lang: Lang) -> Option<&'static str> {
    let source = match (library, lang) {
        (ValidationLibrary::None, _) => return None,
        (ValidationLibrary::Zod, Lang::Ts) => asset!("validation/ts/zod.ts"),
        (ValidationLibrary::Zod, Lang::Js) => asset!("validation/js/zod.js"),
        (ValidationLibrary::Yup, Lang::Ts) => asset!("validation/ts/yup.ts"),
        (ValidationLibrary::Yup, Lang::Js) => asset!("validation/js/yup.js"),
        (ValidationLibrary::IoTs, Lang::Ts) => asset!("validation/ts/io-ts.ts"),
        (ValidationLibrary::IoTs, Lang::Js) => asset!("validation/js/io-ts.js"),
        (ValidationLibrary::Superstruct, Lang::Ts) => asset!("validation/ts/superstruct.ts"),
        (ValidationLibrary::Superstruct, Lang::Js) => asset!("validation/js/superstruct.js"),
        (ValidationLibrary::Valibot, Lang::Ts) => asset!("validation/ts/valibot.ts"),
        (ValidationLibrary::Valibot, Lang::Js) => asset!("validation/js/valibot.js"),
        (ValidationLibrary::Runtypes, Lang::Ts) => asset!("validation/ts/runtypes.ts"),
        (ValidationLibrary::Runtypes, Lang::Js) => asset!("validation/js/runtypes.js"),
    };
    Some(source)
}

/// Source of `lib/result` example helpers
pub(crate) fn error_handling_source(library: ErrorHandlingLibrary, lang: Lang) -> Option<&'static str> {
    let source = match (library, lang) {
        (ErrorHandlingLibrary::None, _) => return None,
        (ErrorHandlingLibrary::Neverthrow, Lang::Ts) => asset!("errors/ts/neverthrow.ts"),
        (ErrorHandlingLibrary::Neverthrow, Lang::Js) => asset!("errors/js/neverthrow.js"),
        (ErrorHandlingLibrary::TsResults, Lang::Ts) => asset!("errors/ts/ts-results.ts"),
        (ErrorHandlingLibrary::TsResults, Lang::Js) => asset!("errors/js/ts-results.js"),
        (ErrorHandlingLibrary::OxideTs, Lang::Ts) => asset!("errors/ts/oxide.ts.ts"),
        (ErrorHandlingLibrary::OxideTs, Lang::Js) => asset!("errors/js/oxide.ts.js"),
        (ErrorHandlingLibrary::TrueMyth, Lang::Ts) => asset!("errors/ts/true-myth.ts"),
        (ErrorHandlingLibrary::TrueMyth, Lang::Js) => asset!("errors/js/true-myth.js"),
        (ErrorHandlingLibrary::PurifyTs, Lang::Ts) => asset!("errors/ts/purify-ts.ts"),
        (ErrorHandlingLibrary::PurifyTs, Lang::Js) => asset!("errors/js/purify-ts.js"),
        (ErrorHandlingLibrary::FpTs, Lang::Ts) => asset!("errors/ts/fp-ts.ts"),
        (ErrorHandlingLibrary::FpTs, Lang::Js) => asset!("errors/js/fp-ts.js"),
    };
    Some(source)
}

/// Add the validation and error-handling modules under `dir` (`""` or `"src/"`)
pub(crate) fn add_library_modules(config: &Configuration, set: &mut FileSet, dir: &str, lang: Lang) {
    if let Some(source) = validation_source(config.validation(), lang) {
        set.add(format!("{}validation/userSchema.{}", dir, lang.ext()), source);
    }
    if let Some(source) = error_handling_source(config.error_handling(), lang) {
        set.add(format!("{}lib/result.{}", dir, lang.ext()), source);
    }
}
