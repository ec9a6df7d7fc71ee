//! Aggregator (`index.ts`) content.
//!
//! Each subfolder aggregator re-exports exactly the symbol its primary file
//! declares, so the naming here has to stay in lockstep with
//! [`super::template`] and [`Subfolder::primary_file_name`].

use super::{module_name::ModuleName, subfolder::Subfolder, template::RenderContext};

/// The single export line of `folder/index.ts`.
///
/// | Folder         | Line                                                             |
/// |----------------|------------------------------------------------------------------|
/// | `repositories` | `export { UserRepository } from './user.repository';`            |
/// | `routes`       | `export { router as userRoutes } from './user.route';`           |
/// | anything else  | `export { UserController } from './user.controller';`            |
pub fn render_index(module: &ModuleName, folder: &Subfolder) -> String {
    let lower = module.lower();
    let pascal = module.pascal();

    match folder {
        Subfolder::Repositories => {
            format!("export {{ {pascal}Repository }} from './{lower}.repository';\n")
        }
        Subfolder::Routes => {
            format!("export {{ router as {lower}Routes }} from './{lower}.route';\n")
        }
        other => format!(
            "export {{ {pascal}{} }} from './{lower}.{}';\n",
            other.singular_pascal(),
            other.singular(),
        ),
    }
}

const MODULE_INDEX: &str = concat!(
    "import { {{MODULE_LOWER}}Routes } from './routes';\n",
    "import { Router } from 'express';\n",
    "\n",
    "const {{MODULE_PASCAL}}Module = Router();\n",
    "\n",
    "{{MODULE_PASCAL}}Module.use('/{{MODULE_LOWER}}', {{MODULE_LOWER}}Routes);\n",
    "\n",
    "export { {{MODULE_PASCAL}}Module };\n",
);

/// The module root `index.ts`: mounts the routes under `/<lower>` and
/// exports `<Pascal>Module`.
pub fn render_module_index(module: &ModuleName) -> String {
    RenderContext::new(module).render(MODULE_INDEX)
}

const REGISTRATION_HINT: &str = concat!(
    "//index.ts\n",
    "import { {{MODULE_PASCAL}}Module } from './Modules/{{MODULE_PASCAL}}';\n",
    "// Add the module to the Express app\n",
    "app.use({{MODULE_PASCAL}}Module);",
);

/// Snippet telling the user how to register the module in their app.
pub fn registration_hint(module: &ModuleName) -> String {
    RenderContext::new(module).render(REGISTRATION_HINT)
}
