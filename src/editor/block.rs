//! Block lookup, removal and construction on `hcl::edit` bodies.

use crate::config::{S3Backend, SettingValue};
use crate::editor::BACKEND_BLOCK;

use hcl::edit::expr::Expression;
use hcl::edit::structure::{Attribute, Block, BlockLabel, Body, Structure};
use hcl::edit::{Decorate, Decorated, Ident};

/// Indentation of one nesting level, as written by `terraform fmt`.
const INDENT: &str = "  ";

/// Find the first block in `body` with the given identifier, ignoring labels.
pub fn find_block_mut<'a>(body: &'a mut Body, ident: &str) -> Option<&'a mut Block> {
    body.blocks_mut().find(|block| block.ident.as_str() == ident)
}

/// Turn a one-line body such as `{ required_version = ">=1.0" }` into a
/// multi-line one with each structure on its own indented line.
///
/// Bodies that are already multi-line are left as they are.
pub fn expand_oneline(body: &mut Body) {
    if !body.prefer_oneline() {
        return;
    }

    let structures: Vec<Structure> = (0..body.len()).map(|_| body.remove(0)).collect();
    for structure in structures {
        match structure {
            Structure::Attribute(mut attribute) => {
                attribute.decor_mut().set_prefix(INDENT);
                attribute.decor_mut().set_suffix("");
                body.push(attribute);
            }
            Structure::Block(mut block) => {
                block.decor_mut().set_prefix(INDENT);
                block.decor_mut().set_suffix("");
                body.push(block);
            }
        }
    }
    body.decor_mut().set_suffix("");
}

/// Remove the first block in `body` with the given identifier and return it.
///
/// Labels are not considered, so `backend "s3"` and `backend "local"` both
/// match `backend`.
pub fn remove_first_block(body: &mut Body, ident: &str) -> Option<Block> {
    let index = body.iter().position(|structure| {
        structure
            .as_block()
            .is_some_and(|block| block.ident.as_str() == ident)
    })?;

    match body.remove(index) {
        Structure::Block(block) => Some(block),
        Structure::Attribute(_) => None,
    }
}

/// Build the `backend "s3"` block, indented for nesting inside a top-level
/// `terraform` block with its `=` signs aligned.
pub fn s3_backend_block(backend: &S3Backend) -> Block {
    let attributes = backend.attributes();
    let width = attributes.iter().map(|(key, _)| key.len()).max().unwrap_or(0);

    let mut block = Block::new(Decorated::new(Ident::new(BACKEND_BLOCK)));
    block
        .labels
        .push(BlockLabel::String(Decorated::new(S3Backend::LABEL.to_string())));
    block.decor_mut().set_prefix(INDENT);

    for (key, value) in attributes {
        let mut key_ident = Decorated::new(Ident::new(key));
        key_ident
            .decor_mut()
            .set_suffix(" ".repeat(width - key.len() + 1));

        let mut attribute = Attribute::new(key_ident, expression(value));
        attribute.decor_mut().set_prefix(INDENT.repeat(2));
        block.body.push(attribute);
    }

    // closing brace lines up with the block identifier
    block.body.decor_mut().set_suffix(INDENT);
    block
}

fn expression(value: SettingValue) -> Expression {
    match value {
        SettingValue::String(s) => Expression::String(Decorated::new(s.to_string())),
        SettingValue::Bool(b) => Expression::Bool(Decorated::new(b)),
    }
}
