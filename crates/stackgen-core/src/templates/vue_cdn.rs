//! Vue 3 on Deno: browser modules loaded through an import map, served by a
//! small Deno static file server

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

const DEV_DEPENDENCIES: &[Package] = &[Package { name: "@std/http", version: "jsr:@std/http@^1.0.0" }];

pub(crate) struct VueCdn;

impl Blueprint for VueCdn {
    fn base(&self, _config: &Configuration) -> FileSet {
        FileSet::new(
            DEPENDENCIES.iter().copied().collect(),
            DEV_DEPENDENCIES.iter().copied().collect(),
        )
    }

    /// Runtime dependencies go to the browser import map, dev dependencies to deno.json
    fn files(&self, config: &Configuration, set: &mut FileSet) -> Result<()> {
        let with_signup = config.validation() != ValidationLibrary::None;
        let style = ImportStyle::BROWSER;

        let serve = "deno run --allow-net --allow-read --allow-env index.ts".to_string();
        let mut tasks: BTreeMap<&'static str, String> =
            BTreeMap::from([("start", serve.clone()), ("dev", serve)]);
        if let Some(test) = testing::test_command(config) {
            tasks.insert("test", test);
        }
        let dev_dependencies: &Manifest = &set.dev_dependencies;
        let deno_json = manifests::deno_json(&tasks, [dev_dependencies], false)?;
        set.add("deno.json", deno_json);

        let import_map = manifests::import_map(&set.dependencies)?;
        set.add(
            "index.html",
            render(
                "index.html",
                asset!("vue-cdn/index.html"),
                context! { title => config.project_name(), import_map => indent(&import_map, 6) },
            )?,
        );
        set.add(".gitignore", asset!("common/gitignore"));
        set.add("index.ts", asset!("vue-cdn/index.ts"));

        let entry = wiring::vue_entry(config, style);
        set.add(
            "main.js",
            render(
                "main.js",
                asset!("vue-cdn/main.js"),
                context! { imports => entry.imports, registrations => entry.registrations },
            )?,
        );

        let (router_imports, routes, links) = if with_signup {
            (
                "import SignUp from './pages/SignUp.js';\n",
                "    { path: '/signup', component: SignUp },\n",
                "      <router-link to=\"/signup\">Sign Up</router-link>\n",
            )
        } else {
            ("", "", "")
        };
        set.add("App.js", render("App.js", asset!("vue-cdn/App.js"), context! { links })?);
        set.add(
            "router.js",
            render(
                "router.js",
                asset!("vue-cdn/router.js"),
                context! { imports => router_imports, routes },
            )?,
        );

        let counter = snippets::vue_counter(config.state(), style.script_ext);
        set.add(
            "pages/Home.js",
            render(
                "pages/Home.js",
                asset!("vue-cdn/pages/Home.js"),
                context! {
                    imports => counter.imports,
                    setup => indent(&counter.setup, 4),
                    returns => counter.bindings,
                    extra => indent(&lines(&counter.extra), 6),
                },
            )?,
        );
        set.add("pages/About.js", asset!("vue-cdn/pages/About.js"));
        set.add("components/HelloWorld.js", asset!("vue-cdn/components/HelloWorld.js"));

        super::add_library_modules(config, set, "", Lang::Js);
        if with_signup {
            set.add("pages/SignUp.js", asset!("vue-cdn/pages/SignUp.js"));
        }

        for (name, content) in stores::vue_stores(config.state(), Lang::Js, style.script_ext)? {
            set.add(format!("stores/{}", name), content);
        }
        for (path, content) in testing::files(config)? {
            set.add(path, content);
        }

        Ok(())
    }
}
