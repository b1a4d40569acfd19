use kitbag_core::util::{camel_to_slug, camel_to_snake, slugify, snake_to_camel};

use super::cli::{CaseArgs, CaseStyle};

pub fn convert(args: &CaseArgs) -> String {
    match args.style {
        CaseStyle::Snake => camel_to_snake(&args.text),
        CaseStyle::Slug => camel_to_slug(&args.text),
        // Slugs and snake names both camelize; dashes fold into underscores.
        CaseStyle::Camel => snake_to_camel(&args.text.replace('-', "_"), false),
        CaseStyle::Pascal => snake_to_camel(&args.text.replace('-', "_"), true),
        CaseStyle::Slugify => slugify(&args.text, &args.sep),
    }
}
