//! # Scene Builder
//!
//! The interpreter: executes the parsed command list strictly in order
//! against a fresh build context. Every failure at the level of a single
//! command is non-fatal - the script as a whole always completes.

use crate::context::BuildContext;
use crate::layout;
use crate::resolve::{self, Resolution};
use crate::solid::{Scene, Solid, SolidKind};
use config::constants::GROOVE_CLEARANCE;
use glam::DVec3;
use textcad_mesh::{boolean, build_shape};
use textcad_parser::{
    Command, CombineOp, CreateCommand, Face, FeatureCommand, FeatureKind, Modification,
    ShapeKind, ShapeParams,
};

// =============================================================================
// COMBINE OUTCOME
// =============================================================================

/// Explicit result of a boolean combination attempt. The fallback on
/// failure - keep the tool, leave the target untouched - is a branch the
/// caller takes, not a caught exception.
#[derive(Debug)]
pub enum CombineOutcome {
    /// The replacement solid, carrying the target's name, position and
    /// rotation.
    Combined(Box<Solid>),
    /// The operation did not happen; the tool comes back to the caller.
    Failed { tool: Box<Solid>, reason: String },
}

/// Combine two solids under a boolean operator.
///
/// Both operands are baked into world space, composed, and the result is
/// re-expressed in the target's local frame so the produced solid inherits
/// the target's position and rotation while occupying the true combined
/// volume. Vertex normals are recomputed.
pub fn combine_solids(tool: Solid, target: &Solid, op: CombineOp) -> CombineOutcome {
    let target_matrix = target.world_matrix();
    if target_matrix.determinant().abs() < config::constants::EPSILON {
        return CombineOutcome::Failed {
            tool: Box::new(tool),
            reason: "target transform is singular".to_string(),
        };
    }

    let tool_world = tool.mesh.transformed(&tool.world_matrix());
    let target_world = target.mesh.transformed(&target_matrix);
    if tool_world.is_empty() || target_world.is_empty() {
        return CombineOutcome::Failed {
            tool: Box::new(tool),
            reason: "empty operand geometry".to_string(),
        };
    }

    let result_world = match op {
        CombineOp::Union => boolean::union(&target_world, &tool_world),
        CombineOp::Subtract => boolean::difference(&target_world, &tool_world),
        CombineOp::Intersect => boolean::intersection(&target_world, &tool_world),
    };

    let mut mesh = result_world.transformed(&target_matrix.inverse());
    mesh.compute_normals();

    CombineOutcome::Combined(Box::new(Solid {
        kind: target.kind,
        mesh,
        color: target.color,
        position: target.position,
        rotation: target.rotation,
        scale: target.scale,
        name: target.name.clone(),
        origin: target.origin,
    }))
}

// =============================================================================
// SCENE BUILDER
// =============================================================================

/// Observer invoked with the about-to-be-combined tool solid, immediately
/// before each boolean computation. This is the pipeline's suspension point
/// for interim feedback; the computation itself is not preemptible.
pub type CombineObserver<'a> = Box<dyn FnMut(&Solid) + 'a>;

/// Executes command lists against fresh build contexts.
#[derive(Default)]
pub struct SceneBuilder<'a> {
    observer: Option<CombineObserver<'a>>,
}

impl<'a> SceneBuilder<'a> {
    pub fn new() -> Self {
        Self { observer: None }
    }

    /// Builder with a pre-combination observer installed.
    pub fn with_observer(observer: impl FnMut(&Solid) + 'a) -> Self {
        Self {
            observer: Some(Box::new(observer)),
        }
    }

    /// Execute the commands in order and return the final scene.
    pub fn build(&mut self, commands: &[Command]) -> Scene {
        let mut ctx = BuildContext::new();
        for (index, command) in commands.iter().enumerate() {
            match command {
                Command::Create(create) => self.exec_create(&mut ctx, commands, index, create),
                Command::Modify { target, change } => exec_modify(&mut ctx, target, change),
                Command::Feature(feature) => self.exec_feature(&mut ctx, index, feature),
                Command::Combine { op, target } => {
                    self.exec_combine(&mut ctx, commands, index, *op, target)
                }
            }
        }
        ctx.into_scene()
    }

    fn notify(&mut self, tool: &Solid) {
        if let Some(observer) = self.observer.as_mut() {
            observer(tool);
        }
    }

    fn exec_create(
        &mut self,
        ctx: &mut BuildContext,
        commands: &[Command],
        index: usize,
        create: &CreateCommand,
    ) {
        let mut produced = Vec::new();

        for rep in 0..create.count.max(1) {
            let mesh = match build_shape(&create.params) {
                Ok(mesh) => mesh,
                Err(error) => {
                    tracing::warn!(%error, kind = %create.kind, "skipping unbuildable shape");
                    break;
                }
            };

            let base_offset = -mesh.bounding_box().0.y;
            let position = layout::place(ctx, commands, create, index, rep, base_offset);
            let solid = Solid {
                kind: SolidKind::Shape(create.kind),
                mesh,
                color: create.color,
                position,
                rotation: DVec3::from(create.rotation.resolve([0.0; 3])),
                scale: DVec3::ONE,
                // Only the first repetition carries the explicit name
                name: if rep == 0 { create.name.clone() } else { None },
                origin: index,
            };

            let Some((op, target)) = &create.combine else {
                produced.push(solid);
                continue;
            };

            match resolve::resolve_target(ctx, commands, index, target) {
                Resolution::Resolved(target_index) => {
                    let Some(target_solid) = ctx.first_solid(target_index).cloned() else {
                        produced.push(solid);
                        continue;
                    };
                    self.notify(&solid);
                    match combine_solids(solid, &target_solid, *op) {
                        CombineOutcome::Combined(result) => {
                            ctx.replace_first(target_index, *result);
                        }
                        CombineOutcome::Failed { tool, reason } => {
                            tracing::warn!(%reason, "combination failed; keeping tool standalone");
                            produced.push(*tool);
                        }
                    }
                }
                Resolution::Unresolved => {
                    tracing::warn!(
                        wanted = ?target,
                        "combination target not found; keeping tool standalone"
                    );
                    produced.push(solid);
                }
            }
        }

        ctx.insert(index, produced);
    }

    fn exec_feature(&mut self, ctx: &mut BuildContext, index: usize, feature: &FeatureCommand) {
        if feature.face != Face::Top {
            tracing::warn!(face = ?feature.face, "only top-face features are supported; skipping");
            return;
        }
        let Some(target_index) = ctx.named_index(&feature.target) else {
            tracing::warn!(solid = %feature.target, "feature target not found; skipping");
            return;
        };
        let Some(target) = ctx.first_solid(target_index).cloned() else {
            return;
        };

        let (bottom, top) = target.world_bounds();
        let (tool_size, op) = match feature.feature {
            // A groove's cutter spans the target's full height, oversized
            // so the cut clears both faces
            FeatureKind::Groove => (
                [
                    feature.width,
                    (top.y - bottom.y) * GROOVE_CLEARANCE,
                    feature.depth,
                ],
                CombineOp::Subtract,
            ),
            FeatureKind::Tab => (
                [feature.width, feature.height, feature.depth],
                CombineOp::Union,
            ),
        };

        let mesh = match build_shape(&ShapeParams::Cube { size: tool_size }) {
            Ok(mesh) => mesh,
            Err(error) => {
                tracing::warn!(%error, "feature tool is degenerate; skipping");
                return;
            }
        };

        // The tool sits centered on the target's top face
        let tool = Solid {
            kind: SolidKind::Shape(ShapeKind::Cube),
            mesh,
            color: target.color,
            position: DVec3::new(target.position.x, top.y, target.position.z),
            rotation: DVec3::ZERO,
            scale: DVec3::ONE,
            name: None,
            origin: index,
        };

        self.notify(&tool);
        match combine_solids(tool, &target, op) {
            CombineOutcome::Combined(result) => ctx.replace_first(target_index, *result),
            CombineOutcome::Failed { tool, reason } => {
                tracing::warn!(%reason, "feature combination failed; keeping tool standalone");
                ctx.insert(index, vec![*tool]);
            }
        }
    }

    fn exec_combine(
        &mut self,
        ctx: &mut BuildContext,
        commands: &[Command],
        index: usize,
        op: CombineOp,
        target: &textcad_parser::Target,
    ) {
        let Some(tool_index) = resolve::resolve_tool(ctx, index) else {
            tracing::warn!("no live solid to use as combination tool; skipping");
            return;
        };
        let Resolution::Resolved(target_index) =
            resolve::resolve_target(ctx, commands, index, target)
        else {
            tracing::warn!(wanted = ?target, "combination target not found; skipping");
            return;
        };
        if tool_index == target_index && ctx.output_len(tool_index) < 2 {
            tracing::warn!("tool and target are the same solid; skipping");
            return;
        }

        let Some(tool) = ctx.take_last(tool_index) else {
            return;
        };
        let Some(target_solid) = ctx.first_solid(target_index).cloned() else {
            ctx.push_back(tool_index, tool);
            return;
        };

        self.notify(&tool);
        match combine_solids(tool, &target_solid, op) {
            CombineOutcome::Combined(result) => ctx.replace_first(target_index, *result),
            CombineOutcome::Failed { tool, reason } => {
                tracing::warn!(%reason, "combination failed; restoring tool");
                ctx.push_back(tool_index, *tool);
            }
        }
    }
}

fn exec_modify(ctx: &mut BuildContext, target: &str, change: &Modification) {
    let Some(solid) = ctx.named_solid_mut(target) else {
        tracing::warn!(solid = %target, "modification target not found; skipping");
        return;
    };
    match change {
        Modification::Color(color) => solid.color = *color,
        // Move overwrites only the supplied axes
        Modification::Move(axes) => {
            solid.position = DVec3::new(
                axes.x.unwrap_or(solid.position.x),
                axes.y.unwrap_or(solid.position.y),
                axes.z.unwrap_or(solid.position.z),
            );
        }
        // Rotate adds the delta to the current rotation
        Modification::Rotate(axes) => {
            solid.rotation += DVec3::from(axes.resolve([0.0; 3]));
        }
        // Scale multiplies the current factor
        Modification::Scale(factor) => solid.scale *= *factor,
    }
}
