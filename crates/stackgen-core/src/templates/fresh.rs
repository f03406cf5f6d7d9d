//! React on Deno: a Fresh app with a Preact island
//!
//! Fresh hydrates each island on its own, so the counter island carries the
//! state and UI providers. `react` is aliased to `preact/compat`.

use super::fileset::{FileSet, Manifest};
use super::render::{indent, lines, render};
use super::{manifests, snippets, stores, testing, wiring, Blueprint, ImportStyle, Lang};
use crate::catalog::{Package, ValidationLibrary};
use crate::config::Configuration;
use crate::error::Result;
use minijinja::context;
use std::collections::BTreeMap;

const DEPENDENCIES: &[Package] = &[
    Package { name: "$fresh/", version: "https://deno.land/x/fresh@1.6.8/" },
    Package { name: "preact", version: "https://esm.sh/preact@10.19.6" },
    Package { name: "preact/", version: "https://esm.sh/preact@10.19.6/" },
    Package { name: "@preact/signals", version: "https://esm.sh/*@preact/signals@1.2.2" },
    Package { name: "@preact/signals-core", version: "https://esm.sh/*@preact/signals-core@1.5.1" },
    Package { name: "react", version: "https://esm.sh/preact@10.19.6/compat" },
    Package { name: "react-dom", version: "https://esm.sh/preact@10.19.6/compat" },
];

pub(crate) struct Fresh;

impl Blueprint for Fresh {
    fn base(&self, _config: &Configuration) -> FileSet {
        let dependencies: Manifest = DEPENDENCIES.iter().copied().collect();
        FileSet::new(dependencies, Manifest::new())
    }

    fn files(&self, config: &Configuration, set: &mut FileSet) -> Result<()> {
        let with_signup = config.validation() != ValidationLibrary::None;
        let style = ImportStyle::DENO;

        let watch = "deno run -A --watch=static/,routes/ dev.ts".to_string();
        let mut tasks: BTreeMap<&'static str, String> = BTreeMap::from([
            ("start", watch.clone()),
            ("dev", watch),
            ("build", "deno run -A dev.ts build".to_string()),
            ("preview", "deno run -A main.ts".to_string()),
            ("check", "deno fmt --check && deno lint".to_string()),
        ]);
        if let Some(test) = testing::test_command(config) {
            tasks.insert("test", test);
        }
        let deno_json = manifests::deno_json(&tasks, [&set.dependencies, &set.dev_dependencies], true)?;
        set.add("deno.json", deno_json);

        set.add(".gitignore", asset!("common/gitignore"));
        set.add("dev.ts", asset!("fresh/dev.ts"));
        set.add("main.ts", asset!("fresh/main.ts"));
        set.add("fresh.config.ts", asset!("fresh/fresh.config.ts"));
        set.add(
            "routes/_app.tsx",
            render(
                "routes/_app.tsx",
                asset!("fresh/routes/_app.tsx"),
                context! { title => config.project_name() },
            )?,
        );
        let extra = if with_signup {
            "      <a href=\"/signup\">Sign up</a>\n"
        } else {
            ""
        };
        set.add(
            "routes/index.tsx",
            render("routes/index.tsx", asset!("fresh/routes/index.tsx"), context! { extra })?,
        );
        set.add("components/Header.tsx", asset!("fresh/components/Header.tsx"));
        set.add("components/Footer.tsx", asset!("fresh/components/Footer.tsx"));

        let counter = snippets::react_counter(config.state(), "preact/hooks", style.script_ext, style.jsx_ext);
        let innermost = if counter.observer {
            "<ObservedCounterButton />"
        } else {
            "<CounterButton />"
        };
        let root = wiring::react_root(config, "../stores/", style, innermost, false, 4);
        let mut prelude = String::new();
        if counter.observer {
            prelude.push_str("\nconst ObservedCounterButton = observer(CounterButton);\n");
        }
        prelude.push_str(&root.prelude);
        set.add(
            "islands/Counter.tsx",
            render(
                "islands/Counter.tsx",
                asset!("fresh/islands/Counter.tsx"),
                context! {
                    imports => format!("{}{}", root.imports, counter.imports),
                    setup => counter.setup,
                    extra => indent(&lines(&counter.extra), 6),
                    prelude,
                    tree => root.tree,
                },
            )?,
        );

        super::add_library_modules(config, set, "", Lang::Ts);
        if with_signup {
            set.add(
                "islands/SignUpForm.tsx",
                render(
                    "islands/SignUpForm.tsx",
                    asset!("common/SignUp.react.tsx"),
                    context! { hooks => "preact/hooks", validation_path => "../validation/userSchema.ts" },
                )?,
            );
            set.add("routes/signup.tsx", asset!("fresh/routes/signup.tsx"));
        }

        for (name, content) in stores::react_stores(config.state(), style.script_ext)? {
            set.add(format!("stores/{}", name), content);
        }
        for (path, content) in testing::files(config)? {
            set.add(path, content);
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{Framework, PackageManager, Runtime, StateLibrary, TestingLibrary, UiLibrary};
    use serde_json::Value;

    fn builder() -> crate::config::ConfigurationBuilder {
        Configuration::builder()
            .framework(Framework::React)
            .runtime(Runtime::Deno)
            .package_manager(PackageManager::Npm)
    }

    fn resolve(config: &Configuration) -> FileSet {
        let mut set = Fresh.base(config);
        for contribution in config.contributions() {
            set.apply(&contribution);
        }
        Fresh.files(config, &mut set).unwrap();
        set
    }

    #[test]
    fn test_skeleton_paths() {
        let set = resolve(&builder().build().unwrap());
        for path in [
            "deno.json",
            "dev.ts",
            "main.ts",
            "fresh.config.ts",
            "routes/_app.tsx",
            "routes/index.tsx",
            "components/Header.tsx",
            "components/Footer.tsx",
            "islands/Counter.tsx",
        ] {
            assert!(set.contains(path), "missing {}", path);
        }
        assert!(!set.contains("package.json"));
    }

    #[test]
    fn test_deno_json_imports_every_dependency() {
        let set = resolve(
            &builder()
                .validation(ValidationLibrary::Zod)
                .testing(TestingLibrary::Vitest)
                .build()
                .unwrap(),
        );
        let json: Value = serde_json::from_str(set.get("deno.json").unwrap()).unwrap();
        assert_eq!(json["imports"]["zod"], "npm:zod@^3.22.4");
        assert_eq!(json["imports"]["vitest"], "npm:vitest@^1.3.1");
        assert_eq!(json["imports"]["$fresh/"], "https://deno.land/x/fresh@1.6.8/");
        assert_eq!(json["tasks"]["test"], "deno run -A npm:vitest run");
        assert_eq!(json["compilerOptions"]["jsx"], "react-jsx");
    }

    #[test]
    fn test_island_without_provider() {
        let set = resolve(&builder().state(StateLibrary::Jotai).build().unwrap());
        let island = set.get("islands/Counter.tsx").unwrap();
        assert!(island.contains("import { counterAtom } from '../stores/counterAtom.ts';"));
        assert!(island.contains("  return (\n    <CounterButton />\n  );"));
    }

    #[test]
    fn test_island_wraps_mobx_observer_in_providers() {
        let set = resolve(&builder().state(StateLibrary::Mobx).ui(UiLibrary::Antd).build().unwrap());
        let island = set.get("islands/Counter.tsx").unwrap();
        assert!(island.contains("const ObservedCounterButton = observer(CounterButton);"));
        assert!(island.contains(
            "    <CounterStoreProvider>\n      <ConfigProvider>\n        <ObservedCounterButton />"
        ));
        assert!(set.contains("stores/counterStore.tsx"));
    }

    #[test]
    fn test_signup_island_uses_preact_hooks() {
        let set = resolve(&builder().validation(ValidationLibrary::Yup).build().unwrap());
        let form = set.get("islands/SignUpForm.tsx").unwrap();
        assert!(form.contains("from 'preact/hooks';"));
        assert!(form.contains("'../validation/userSchema.ts'"));
        assert!(set.contains("routes/signup.tsx"));
        assert!(set.get("routes/index.tsx").unwrap().contains("href=\"/signup\""));
    }
}
