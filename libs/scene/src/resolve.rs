//! # Reference Resolver
//!
//! Resolves named or typed targets against the build context. Resolution
//! failures are ordinary values, not errors - the caller decides the
//! fallback.

use crate::context::BuildContext;
use textcad_parser::{Command, Target};

/// Outcome of a target lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolution {
    /// Command index owning the referenced solid.
    Resolved(usize),
    Unresolved,
}

/// Resolve a target against the context.
///
/// - `ByName`: direct name-map lookup.
/// - `ByKind`: scan command indices backward from `current` for the first
///   `Create` of that kind with live output.
pub fn resolve_target(
    ctx: &BuildContext,
    commands: &[Command],
    current: usize,
    target: &Target,
) -> Resolution {
    match target {
        Target::ByName(name) => match ctx.named_index(name) {
            Some(index) => Resolution::Resolved(index),
            None => Resolution::Unresolved,
        },
        Target::ByKind(kind) => {
            for index in (0..current.min(commands.len())).rev() {
                if let Command::Create(create) = &commands[index] {
                    if create.kind == *kind && ctx.has_live(index) {
                        return Resolution::Resolved(index);
                    }
                }
            }
            Resolution::Unresolved
        }
    }
}

/// Resolve the tool for a standalone combination: the most recently
/// created live solid, independent of kind.
pub fn resolve_tool(ctx: &BuildContext, current: usize) -> Option<usize> {
    ctx.latest_live_before(current)
}

// =============================================================================
// TESTS
// =============================================================================
