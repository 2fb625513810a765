//! Mirror demo
//!
//! Takes a left arm joint chain, derives the FK control names for both sides,
//! mirrors the world matrices across the character's YZ plane and prints
//! each control's offset relative to its parent.

use rigpie::prelude::*;

struct ArmJoint {
    name: &'static str,
    position: Vector,
    rotation: [f64; 3],
}

const LEFT_ARM: [ArmJoint; 4] = [
    ArmJoint { name: "LfClavicleJnt", position: Vector::new(4.0, 150.0, 2.0), rotation: [0.0, 0.0, 5.0] },
    ArmJoint { name: "LfShoulderJnt", position: Vector::new(18.0, 148.0, -1.0), rotation: [0.0, 10.0, -40.0] },
    ArmJoint { name: "LfElbowJnt", position: Vector::new(38.0, 126.0, -3.0), rotation: [0.0, -15.0, -45.0] },
    ArmJoint { name: "LfWristJnt", position: Vector::new(55.0, 108.0, 1.0), rotation: [5.0, 0.0, -45.0] },
];

struct Placement {
    name: StructuredName,
    world: Transform,
}

fn fk_controls(joints: &[ArmJoint]) -> Result<Vec<Placement>> {
    joints
        .iter()
        .enumerate()
        .map(|(index, joint)| -> Result<Placement> {
            let name = StructuredName::decode(joint.name)?
                .append_descriptor("Fk")
                .with_iterator(index + 1)
                .with_category(category::CTRL);
            let [x, y, z] = joint.rotation;
            let world = Transform::from_euler_degrees(x, y, z) * Transform::from_translation(joint.position);
            Ok(Placement { name, world })
        })
        .collect()
}

fn mirror(placements: &[Placement]) -> Vec<Placement> {
    placements
        .iter()
        .map(|p| Placement { name: p.name.mirrored(), world: p.world.mirrored() })
        .collect()
}

fn report(placements: &[Placement]) -> Result<()> {
    let mut parent: Option<&Placement> = None;
    for placement in placements {
        let local = match parent {
            Some(parent) => placement.world * parent.world.inverse()?,
            None => placement.world,
        };
        let [rx, ry, rz] = local.rotation_degrees();
        println!(
            "{:<22} t={} r=[{rx:.1},{ry:.1},{rz:.1}]",
            placement.name.to_string(),
            local.translation(),
        );
        parent = Some(placement);
    }
    Ok(())
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let left = fk_controls(&LEFT_ARM)?;
    let right = mirror(&left);
    log::info!("Derived {} controls per side", left.len());

    println!("-- left --");
    report(&left)?;
    println!("-- right --");
    report(&right)?;

    if let Err(err) = StructuredName::decode("lfbrokenname") {
        log::warn!("Skipping joint: {err}");
    }

    Ok(())
}
