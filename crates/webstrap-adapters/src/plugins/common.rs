//! Bundles shared by both project kinds: git, prettier, eslint, husky.

use webstrap_core::domain::{
    DependencySpec, FileCategory, FileContent, FileSpec, PluginBundle, ScriptSpec,
};

// ── git ───────────────────────────────────────────────────────────────────────

const GITIGNORE: &str = r#"# dependencies
/node_modules
/.pnp
.pnp.js

# testing
/coverage

# production
/build
/dist

# misc
.DS_Store
.env
.env.local
.env.development.local
.env.test.local
.env.production.local

npm-debug.log*
yarn-debug.log*
yarn-error.log*
"#;

/// `.gitignore` written right after `git init`.
pub fn git() -> PluginBundle {
    PluginBundle {
        success_message: Some("Successfully initialized git with a .gitignore !"),
        files: vec![FileSpec {
            dir: &[],
            name: ".gitignore",
            category: FileCategory::Verbatim,
            content: FileContent::Literal(GITIGNORE),
        }],
        ..PluginBundle::named("git")
    }
}

// ── prettier ──────────────────────────────────────────────────────────────────

const PRETTIERRC: &str = r#"{
  "semi": true,
  "singleQuote": false,
  "arrowParens": "avoid",
  "trailingComma": "es5",
  "printWidth": 80,
  "tabWidth": 2
}
"#;

const PRETTIERIGNORE: &str = r#"node_modules
build
dist
coverage
package-lock.json
yarn.lock
pnpm-lock.yaml
"#;

pub fn prettier() -> PluginBundle {
    PluginBundle {
        initializing_message: Some("Adding Prettier, Please wait !"),
        success_message: Some("Successfully added Prettier with formatting scripts !"),
        files: vec![
            FileSpec {
                dir: &[],
                name: ".prettierrc.json",
                category: FileCategory::Verbatim,
                content: FileContent::Literal(PRETTIERRC),
            },
            FileSpec {
                dir: &[],
                name: ".prettierignore",
                category: FileCategory::Verbatim,
                content: FileContent::Literal(PRETTIERIGNORE),
            },
        ],
        dev_dependencies: Some(DependencySpec::Literal("prettier")),
        scripts: Some(ScriptSpec::Literal(&[
            ("format", "prettier --write ."),
            ("format:check", "prettier --check ."),
        ])),
        ..PluginBundle::named("prettier")
    }
}

// ── eslint ────────────────────────────────────────────────────────────────────

fn eslintrc(ctx: &webstrap_core::domain::TemplateContext) -> String {
    let parser = if ctx.typed {
        "\n  \"parser\": \"@typescript-eslint/parser\","
    } else {
        ""
    };
    let ts_extends = if ctx.typed {
        "\n    \"plugin:@typescript-eslint/recommended\","
    } else {
        ""
    };

    format!(
        r#"{{
  "root": true,
  "env": {{
    "browser": true,
    "es2021": true
  }},{parser}
  "extends": [
    "eslint:recommended",{ts_extends}
    "plugin:react/recommended",
    "plugin:react-hooks/recommended"
  ],
  "settings": {{
    "react": {{
      "version": "detect"
    }}
  }},
  "rules": {{
    "react/react-in-jsx-scope": "off"
  }}
}}
"#
    )
}

fn eslint_dev_dependencies(ctx: &webstrap_core::domain::TemplateContext) -> String {
    let mut deps =
        "eslint eslint-plugin-react eslint-plugin-react-hooks".to_string();
    if ctx.typed {
        deps.push_str(" @typescript-eslint/parser @typescript-eslint/eslint-plugin");
    }
    deps
}

pub fn eslint() -> PluginBundle {
    PluginBundle {
        initializing_message: Some("Adding ESLint, Please wait !"),
        success_message: Some("Successfully added ESLint with lint scripts !"),
        files: vec![FileSpec {
            dir: &[],
            name: ".eslintrc.json",
            category: FileCategory::Verbatim,
            content: FileContent::Render(eslintrc),
        }],
        dev_dependencies: Some(DependencySpec::Render(eslint_dev_dependencies)),
        scripts: Some(ScriptSpec::Literal(&[
            ("lint", "eslint src"),
            ("lint:fix", "eslint src --fix"),
        ])),
        ..PluginBundle::named("eslint")
    }
}

// ── husky ─────────────────────────────────────────────────────────────────────

const PRE_COMMIT_HOOK: &str = r#"#!/usr/bin/env sh
. "$(dirname -- "$0")/_/husky.sh"

npx lint-staged
"#;

const LINTSTAGEDRC: &str = r#"{
  "*.{js,jsx,ts,tsx}": ["eslint --fix", "prettier --write"],
  "*.{json,css,md}": ["prettier --write"]
}
"#;

pub fn husky() -> PluginBundle {
    PluginBundle {
        initializing_message: Some("Adding Husky, Please wait !"),
        success_message: Some("Successfully added Husky with a pre-commit hook !"),
        files: vec![
            FileSpec {
                dir: &[".husky"],
                name: "pre-commit",
                category: FileCategory::Verbatim,
                content: FileContent::Literal(PRE_COMMIT_HOOK),
            },
            FileSpec {
                dir: &[],
                name: ".lintstagedrc.json",
                category: FileCategory::Verbatim,
                content: FileContent::Literal(LINTSTAGEDRC),
            },
        ],
        dev_dependencies: Some(DependencySpec::Literal("husky lint-staged")),
        scripts: Some(ScriptSpec::Literal(&[("prepare", "husky install")])),
        ..PluginBundle::named("husky")
    }
}
