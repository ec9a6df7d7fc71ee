//! Primary-file templates.
//!
//! ## Structure
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  PrimaryTemplate (static record, one per built-in folder)   │
//! │  ├── imports: [ImportSpec { names, from }]                  │
//! │  └── body: placeholder text                                 │
//! ├─────────────────────────────────────────────────────────────┤
//! │  RenderContext (Value Object)                               │
//! │  └── Variable substitution: {{MODULE_PASCAL}} -> "BlogPost" │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! Output is `imports` (one line each), a blank line when there were any
//! imports, then `body`. The body's trailing newline, or lack of one, is
//! part of the generated file and must be preserved exactly.

use std::collections::HashMap;

use super::{module_name::ModuleName, subfolder::Subfolder};

/// Context for template rendering.
///
/// ## Built-in Variables
///
/// | Variable        | `blog_post` renders as |
/// |-----------------|------------------------|
/// | `MODULE_NAME`   | `blog_post`            |
/// | `MODULE_PASCAL` | `BlogPost`             |
/// | `MODULE_CAMEL`  | `blogPost`             |
/// | `MODULE_LOWER`  | `blog_post`            |
/// | `MODULE_KEBAB`  | `blog_post`            |
#[derive(Debug, Clone)]
pub struct RenderContext {
    variables: HashMap<&'static str, String>,
}

impl RenderContext {
    pub fn new(module: &ModuleName) -> Self {
        let mut vars = HashMap::new();
        vars.insert("MODULE_NAME", module.as_str().to_string());
        vars.insert("MODULE_PASCAL", module.pascal());
        vars.insert("MODULE_CAMEL", module.camel());
        vars.insert("MODULE_LOWER", module.lower());
        vars.insert("MODULE_KEBAB", module.kebab());
        Self { variables: vars }
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.variables.get(key).map(String::as_str)
    }

    /// Replace every `{{VARIABLE}}` placeholder.
    ///
    /// Unknown placeholders are left as-is. Values never contain braces
    /// (module names are validated), so substitution order does not matter.
    pub fn render(&self, template: &str) -> String {
        let mut result = template.to_string();
        for (key, value) in &self.variables {
            let placeholder = format!("{{{{{key}}}}}");
            result = result.replace(&placeholder, value);
        }
        result
    }
}

/// A named ES import: `import { A, B } from 'from';`.
#[derive(Debug, Clone, Copy)]
pub struct ImportSpec {
    pub names: &'static [&'static str],
    pub from: &'static str,
}

impl ImportSpec {
    pub fn to_line(&self) -> String {
        format!("import {{ {} }} from '{}';", self.names.join(", "), self.from)
    }
}

/// Static description of one folder's primary file.
#[derive(Debug, Clone, Copy)]
pub struct PrimaryTemplate {
    pub imports: &'static [ImportSpec],
    pub body: &'static str,
}

impl PrimaryTemplate {
    /// The template for a built-in folder; `None` for custom folders.
    pub fn for_subfolder(folder: &Subfolder) -> Option<&'static Self> {
        match folder {
            Subfolder::Controllers => Some(&CONTROLLER),
            Subfolder::Middlewares => Some(&MIDDLEWARE),
            Subfolder::Routes => Some(&ROUTE),
            Subfolder::Services => Some(&SERVICE),
            Subfolder::Repositories => Some(&REPOSITORY),
            Subfolder::Custom(_) => None,
        }
    }

    pub fn render(&self, ctx: &RenderContext) -> String {
        let mut out = String::new();
        for import in self.imports {
            out.push_str(&import.to_line());
            out.push('\n');
        }
        if !self.imports.is_empty() {
            out.push('\n');
        }
        out.push_str(self.body);
        ctx.render(&out)
    }
}

/// Full text of `folder`'s primary file for `module`.
///
/// Pure and deterministic. Custom folders render to an empty string.
pub fn render(module: &ModuleName, folder: &Subfolder) -> String {
    PrimaryTemplate::for_subfolder(folder)
        .map(|t| t.render(&RenderContext::new(module)))
        .unwrap_or_default()
}

// ── Built-in templates ────────────────────────────────────────────────────────

const EXPRESS: &str = "express";

static CONTROLLER: PrimaryTemplate = PrimaryTemplate {
    imports: &[
        ImportSpec {
            names: &["Request", "Response"],
            from: EXPRESS,
        },
        ImportSpec {
            names: &["{{MODULE_PASCAL}}Service"],
            from: "../services",
        },
    ],
    body: concat!(
        "export class {{MODULE_PASCAL}}Controller {\n",
        "    private {{MODULE_LOWER}}Service: {{MODULE_PASCAL}}Service;\n",
        "\n",
        "    constructor() {\n",
        "        this.{{MODULE_LOWER}}Service = new {{MODULE_PASCAL}}Service();\n",
        "    }\n",
        "}",
    ),
};

static MIDDLEWARE: PrimaryTemplate = PrimaryTemplate {
    imports: &[ImportSpec {
        names: &["Request", "Response", "NextFunction"],
        from: EXPRESS,
    }],
    body: concat!(
        "export const {{MODULE_PASCAL}}Middleware = (req: Request, res: Response, next: NextFunction) => {\n",
        "    console.log(`{{MODULE_PASCAL}} Request - ${req.method} ${req.path}`);\n",
        "    next();\n",
        "}\n",
    ),
};

static ROUTE: PrimaryTemplate = PrimaryTemplate {
    imports: &[
        ImportSpec {
            names: &["Router"],
            from: EXPRESS,
        },
        ImportSpec {
            names: &["{{MODULE_PASCAL}}Controller"],
            from: "../controllers",
        },
        ImportSpec {
            names: &["{{MODULE_PASCAL}}Middleware"],
            from: "../middlewares",
        },
    ],
    body: concat!(
        "const router = Router();\n",
        "const {{MODULE_LOWER}}Controller = new {{MODULE_PASCAL}}Controller();\n",
        "\n",
        "// Apply middleware\n",
        "router.use({{MODULE_PASCAL}}Middleware);\n",
        "\n",
        "// Test route to ensure the API is working\n",
        "router.get('/ping', (req, res) => res.send('pong'));\n",
        "\n",
        "export { router };",
    ),
};

static SERVICE: PrimaryTemplate = PrimaryTemplate {
    imports: &[ImportSpec {
        names: &["{{MODULE_PASCAL}}Repository"],
        from: "../repositories",
    }],
    body: concat!(
        "export class {{MODULE_PASCAL}}Service {\n",
        "    private {{MODULE_LOWER}}Repository: {{MODULE_PASCAL}}Repository;\n",
        "\n",
        "    constructor() {\n",
        "        this.{{MODULE_LOWER}}Repository = new {{MODULE_PASCAL}}Repository();\n",
        "    }\n",
        "}",
    ),
};

static REPOSITORY: PrimaryTemplate = PrimaryTemplate {
    imports: &[],
    body: concat!(
        "export class {{MODULE_PASCAL}}Repository {\n",
        "    // Define repository methods here\n",
        "}",
    ),
};
