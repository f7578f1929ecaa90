//! Vector command

use anyhow::{bail, Context, Result};
use rastr_math::Vec3;
use serde_json::{json, Value};
use tracing::debug;

use super::{parse_vec3, Output};
use crate::VecArgs;

/// Result of a vector operation.
enum Outcome {
    Scalar(f32),
    Vector(Vec3),
}

fn evaluate(op: &str, a: Vec3, b: Option<Vec3>, t: f32) -> Result<Outcome> {
    let need_b = || b.with_context(|| format!("'{op}' needs a second vector"));
    let outcome = match op {
        "angle" => Outcome::Scalar(a.angle_degrees(need_b()?)),
        "dot" => Outcome::Scalar(a.dot(need_b()?)),
        "distance" => Outcome::Scalar(a.distance(need_b()?)),
        "cross" => Outcome::Vector(a.cross(need_b()?)),
        "slerp" => Outcome::Vector(a.slerp(need_b()?, t)),
        "project" => Outcome::Vector(a.project(need_b()?)),
        "reflect" => Outcome::Vector(a.reflect(need_b()?.normalize())),
        "normalize" => Outcome::Vector(a.normalize()),
        _ => bail!(
            "Unknown vector op: {op} (angle, cross, dot, slerp, project, reflect, normalize, distance)"
        ),
    };
    Ok(outcome)
}

pub fn run(args: VecArgs, out: &Output) -> Result<()> {
    let a = parse_vec3(&args.a)?;
    let b = args.b.as_deref().map(parse_vec3).transpose()?;
    let op = args.op.to_lowercase();
    debug!(%op, %a, ?b, t = args.t, "vec");

    match evaluate(&op, a, b, args.t)? {
        Outcome::Scalar(s) => {
            let value: Value = json!({ "op": op, "result": s });
            out.emit(value, |p| format!("{s:.p$}"))
        }
        Outcome::Vector(v) => {
            let value: Value = json!({ "op": op, "result": v });
            out.emit(value, |p| format!("{v:.p$}"))
        }
    }
}
