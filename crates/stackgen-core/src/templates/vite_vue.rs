//! Vue 3 on Vite (node or bun)

use super::fileset::{FileSet, Manifest};
use super::render::{indent, lines, render};
use super::{manifests, snippets, stores, testing, wiring, Blueprint, ImportStyle, Lang};
use crate::catalog::{Package, ValidationLibrary};
use crate::config::Configuration;
use crate::error::Result;
use minijinja::context;
use std::collections::BTreeMap;

const DEPENDENCIES: &[Package] = &[
    Package { name: "vue", version: "^3.4.21" },
    Package { name: "vue-router", version: "^4.3.0" },
];

const DEV_DEPENDENCIES: &[Package] = &[
    Package { name: "@vitejs/plugin-vue", version: "^5.0.4" },
    Package { name: "vue-tsc", version: "^2.0.6" },
    Package { name: "eslint-plugin-vue", version: "^9.23.0" },
    Package { name: "vue-eslint-parser", version: "^9.4.2" },
];

pub(crate) struct ViteVue;

impl Blueprint for ViteVue {
    fn base(&self, config: &Configuration) -> FileSet {
        let dependencies: Manifest = DEPENDENCIES.iter().copied().collect();
        let mut dev_dependencies: Manifest = DEV_DEPENDENCIES.iter().copied().collect();
        dev_dependencies.extend(super::VITE_TOOLING);
        dev_dependencies.extend(&[super::runtime_types(config.runtime())]);
        FileSet::new(dependencies, dev_dependencies)
    }

    fn files(&self, config: &Configuration, set: &mut FileSet) -> Result<()> {
        let title = config.project_name();
        let with_signup = config.validation() != ValidationLibrary::None;

        let mut scripts: BTreeMap<&'static str, String> = BTreeMap::from([
            ("dev", "vite".to_string()),
            ("build", "vue-tsc --noEmit && vite build".to_string()),
            ("preview", "vite preview".to_string()),
            ("lint", "eslint . --ext ts,vue".to_string()),
            ("typecheck", "vue-tsc --noEmit".to_string()),
        ]);
        if let Some(test) = testing::test_command(config) {
            scripts.insert("test", test);
        }
        let package_json =
            manifests::package_json(&title, &scripts, &set.dependencies, &set.dev_dependencies)?;
        set.add("package.json", package_json);

        set.add("tsconfig.json", asset!("vite-vue/tsconfig.json"));
        set.add("tsconfig.node.json", asset!("vite-vue/tsconfig.node.json"));
        super::add_tooling_files(set, asset!("common/eslintrc.vue.json"));
        set.add(
            "index.html",
            render("index.html", asset!("vite-vue/index.html"), context! { title })?,
        );
        set.add("vite.config.ts", asset!("vite-vue/vite.config.ts"));
        set.add("src/env.d.ts", asset!("vite-vue/src/env.d.ts"));

        let entry = wiring::vue_entry(config, ImportStyle::VITE);
        set.add(
            "src/main.ts",
            render(
                "src/main.ts",
                asset!("vite-vue/src/main.ts"),
                context! { imports => entry.imports, registrations => entry.registrations },
            )?,
        );

        let (router_imports, routes, links) = if with_signup {
            (
                "import SignUp from './pages/SignUp.vue';\n",
                "    { path: '/signup', component: SignUp },\n",
                "    <RouterLink to=\"/signup\">Sign Up</RouterLink>\n",
            )
        } else {
            ("", "", "")
        };
        set.add(
            "src/App.vue",
            render("src/App.vue", asset!("vite-vue/src/App.vue"), context! { links })?,
        );
        set.add(
            "src/router.ts",
            render(
                "src/router.ts",
                asset!("vite-vue/src/router.ts"),
                context! { imports => router_imports, routes },
            )?,
        );

        let counter = snippets::vue_counter(config.state(), "");
        set.add(
            "src/pages/Home.vue",
            render(
                "src/pages/Home.vue",
                asset!("vite-vue/src/pages/Home.vue"),
                context! {
                    extra => indent(&lines(&counter.extra), 4),
                    script => format!("{}\n{}", counter.imports, counter.setup),
                },
            )?,
        );
        set.add("src/pages/About.vue", asset!("vite-vue/src/pages/About.vue"));
        set.add("src/components/HelloWorld.vue", asset!("vite-vue/src/components/HelloWorld.vue"));

        super::add_library_modules(config, set, "src/", Lang::Ts);
        if with_signup {
            set.add("src/pages/SignUp.vue", asset!("vite-vue/src/pages/SignUp.vue"));
        }

        for (name, content) in stores::vue_stores(config.state(), Lang::Ts, "")? {
            set.add(format!("src/stores/{}", name), content);
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
    use crate::catalog::{Framework, PackageManager, Runtime, StateLibrary, UiLibrary};

    fn builder() -> crate::config::ConfigurationBuilder {
        Configuration::builder()
            .framework(Framework::Vue3)
            .runtime(Runtime::Bun)
            .package_manager(PackageManager::Bun)
    }

    fn resolve(config: &Configuration) -> FileSet {
        let mut set = ViteVue.base(config);
        for contribution in config.contributions() {
            set.apply(&contribution);
        }
        ViteVue.files(config, &mut set).unwrap();
        set
    }

    #[test]
    fn test_skeleton_paths() {
        let set = resolve(&builder().build().unwrap());
        for path in [
            "package.json",
            ".eslintrc.json",
            "index.html",
            "src/main.ts",
            "src/App.vue",
            "src/router.ts",
            "src/env.d.ts",
            "src/pages/Home.vue",
            "src/pages/About.vue",
            "src/components/HelloWorld.vue",
        ] {
            assert!(set.contains(path), "missing {}", path);
        }
        assert!(!set.contains("src/pages/SignUp.vue"));
    }

    #[test]
    fn test_default_counter_is_local_ref() {
        let set = resolve(&builder().build().unwrap());
        let home = set.get("src/pages/Home.vue").unwrap();
        assert!(home.contains("import { ref } from 'vue';\n\nconst count = ref(0);"));
        assert_eq!(
            set.get("src/main.ts").unwrap(),
            asset!("vite-vue/src/main.ts")
                .replace("[[[ imports ]]]", "")
                .replace("[[[ registrations ]]]", "")
        );
    }

    #[test]
    fn test_pinia_registered_and_used() {
        let set = resolve(&builder().state(StateLibrary::Pinia).ui(UiLibrary::NaiveUi).build().unwrap());
        let main = set.get("src/main.ts").unwrap();
        assert!(main.contains("app.use(router);\napp.use(createPinia());\napp.use(naive);\napp.mount('#app');"));
        assert!(set.contains("src/stores/counter.ts"));
        assert!(set.get("src/pages/Home.vue").unwrap().contains("useCounterStore"));
    }

    #[test]
    fn test_signup_page_with_validation() {
        let set = resolve(&builder().validation(ValidationLibrary::Runtypes).build().unwrap());
        assert!(set.contains("src/validation/userSchema.ts"));
        assert!(set.contains("src/pages/SignUp.vue"));
        assert!(set.get("src/router.ts").unwrap().contains("{ path: '/signup', component: SignUp },"));
    }
}
