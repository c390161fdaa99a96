//! # Layout Engine
//!
//! Computes a new solid's position from its command's placement rules, in
//! priority order: relative placement first, then explicit/default per-axis
//! coordinates. The first successful step wins.

use crate::context::BuildContext;
use crate::resolve::{self, Resolution};
use config::constants::{ROW_SPACING, SPREAD_SPACING};
use glam::DVec3;
use textcad_parser::{Command, CreateCommand};

/// Compute the position for repetition `rep` of a creation command.
///
/// ## Parameters
///
/// - `create`: the creation command
/// - `index`: the command's index in the script
/// - `rep`: repetition number, 0-based
/// - `base_offset`: distance from the new solid's origin to its lowest
///   point, for flush stacking
pub fn place(
    ctx: &BuildContext,
    commands: &[Command],
    create: &CreateCommand,
    index: usize,
    rep: usize,
    base_offset: f64,
) -> DVec3 {
    // Priority 1: relative placement on another solid's top face
    if let Some(relation) = &create.relation {
        if let Resolution::Resolved(target_index) =
            resolve::resolve_target(ctx, commands, index, &relation.target)
        {
            if let Some(target) = ctx.first_solid(target_index) {
                let (_, top) = target.world_bounds();
                return DVec3::new(
                    target.position.x,
                    top.y + base_offset,
                    target.position.z,
                );
            }
        }
        // Unresolved relation falls through to default placement
    }

    // Priority 2: explicit coordinates, each axis independently defaulted.
    // Repetitions spread along X centered on zero; command rows step back
    // along Z.
    let spread = (rep as f64 - (create.count as f64 - 1.0) / 2.0) * SPREAD_SPACING;
    let defaults = [spread, 0.0, index as f64 * ROW_SPACING];
    DVec3::from(create.position.resolve(defaults))
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use textcad_parser::{parse, Command};

    fn create_at(commands: &[Command], index: usize) -> &CreateCommand {
        match &commands[index] {
            Command::Create(c) => c,
            other => panic!("expected create, got {:?}", other),
        }
    }

    #[test]
    fn test_first_command_defaults_to_origin() {
        let commands = parse("create a cube.");
        let pos = place(
            &BuildContext::new(),
            &commands,
            create_at(&commands, 0),
            0,
            0,
            0.5,
        );
        assert_eq!(pos, DVec3::ZERO);
    }

    #[test]
    fn test_later_commands_step_back_in_z() {
        let commands = parse("create a cube. create a sphere.");
        let pos = place(
            &BuildContext::new(),
            &commands,
            create_at(&commands, 1),
            1,
            0,
            1.0,
        );
        assert_relative_eq!(pos.z, ROW_SPACING, epsilon = 1e-12);
    }

    #[test]
    fn test_repetitions_spread_centered_on_zero() {
        let commands = parse("create 3 cubes.");
        let create = create_at(&commands, 0);
        let ctx = BuildContext::new();
        let xs: Vec<f64> = (0..3)
            .map(|rep| place(&ctx, &commands, create, 0, rep, 0.5).x)
            .collect();
        assert_relative_eq!(xs[0], -SPREAD_SPACING, epsilon = 1e-12);
        assert_relative_eq!(xs[1], 0.0, epsilon = 1e-12);
        assert_relative_eq!(xs[2], SPREAD_SPACING, epsilon = 1e-12);
    }

    #[test]
    fn test_explicit_axis_overrides_default() {
        let commands = parse("create a cube at y 7.");
        let pos = place(
            &BuildContext::new(),
            &commands,
            create_at(&commands, 0),
            0,
            0,
            0.5,
        );
        assert_relative_eq!(pos.y, 7.0, epsilon = 1e-12);
        assert_relative_eq!(pos.x, 0.0, epsilon = 1e-12);
    }

    #[test]
    fn test_unresolved_relation_falls_back_to_defaults() {
        let commands = parse("create a cube on top of 'ghost'.");
        let pos = place(
            &BuildContext::new(),
            &commands,
            create_at(&commands, 0),
            0,
            0,
            0.5,
        );
        assert_eq!(pos, DVec3::ZERO);
    }
}
