//! Per-category placement rules.
//!
//! Each rule places every object of its categories relative to the desk
//! frame. Rules run in table order and may read placements made by earlier
//! rules (keyboards follow monitors, mice follow keyboards, webcams sit on
//! monitors).

use std::f64::consts::{FRAC_PI_2, FRAC_PI_4, PI};

use deskplan_core::{ObjectCategory, PlacedObject, Room};

use super::{ArrangementConfig, ArrangementPlan, DeskFrame, Placement};

/// Inputs shared by all rules.
pub(crate) struct RuleContext<'a> {
    pub desk: &'a DeskFrame,
    pub room: &'a Room,
    pub config: &'a ArrangementConfig,
    /// Every object except the desk being arranged.
    pub others: &'a [&'a PlacedObject],
}

impl<'a> RuleContext<'a> {
    /// Objects of `category`, in collection order.
    fn of(&self, category: ObjectCategory) -> Vec<&'a PlacedObject> {
        self.others
            .iter()
            .copied()
            .filter(|o| o.is(category))
            .collect()
    }
}

type RuleFn = fn(&RuleContext<'_>, &mut ArrangementPlan);

/// Placement rules in execution order.
pub(crate) const RULES: &[(&[ObjectCategory], RuleFn)] = &[
    (&[ObjectCategory::Monitor], place_monitors),
    (&[ObjectCategory::MonitorStand], place_monitor_stands),
    (&[ObjectCategory::Keyboard], place_keyboards),
    (&[ObjectCategory::Mouse], place_mice),
    (&[ObjectCategory::PcTower], place_towers),
    (&[ObjectCategory::Speaker], place_speakers),
    (&[ObjectCategory::Lamp], place_lamps),
    (&[ObjectCategory::Webcam], place_webcams),
    (&[ObjectCategory::Microphone], place_microphones),
    (ACCESSORIES, place_accessories),
    (&[ObjectCategory::Headphones], place_headphones),
    (&[ObjectCategory::Plant], place_plants),
    (&[ObjectCategory::Clock], place_clocks),
    (&[ObjectCategory::Poster], place_posters),
    (&[ObjectCategory::Shelf], place_shelves),
    (&[ObjectCategory::CableTray], place_cable_trays),
    (&[ObjectCategory::Chair], place_chairs),
];

/// Small desk items packed left to right, in this category order.
pub(crate) const ACCESSORIES: &[ObjectCategory] = &[
    ObjectCategory::Mug,
    ObjectCategory::Notebook,
    ObjectCategory::Phone,
    ObjectCategory::Tablet,
    ObjectCategory::Pen,
    ObjectCategory::Books,
];

/// Whether some rule places objects of `category`.
#[cfg(test)]
pub(crate) fn has_rule(category: ObjectCategory) -> bool {
    RULES.iter().any(|(cats, _)| cats.contains(&category))
}

const MONITOR_SPACING: f64 = 0.25;
const MONITOR_BASE_OFFSET: f64 = 0.08;
const MONITOR_BACK_INSET: f64 = 0.25;
const FRONT_ROW_INSET: f64 = 0.15;

fn upright(position: [f64; 3]) -> Placement {
    Placement::new(position, [0.0; 3])
}

fn turned(position: [f64; 3], yaw: f64) -> Placement {
    Placement::new(position, [0.0, yaw, 0.0])
}

/// Alternate sides by index parity: even gets `even`, odd gets `odd`.
fn by_parity<T>(index: usize, even: T, odd: T) -> T {
    if index % 2 == 0 {
        even
    } else {
        odd
    }
}

fn place_monitors(ctx: &RuleContext<'_>, plan: &mut ArrangementPlan) {
    let desk = ctx.desk;
    let monitors = ctx.of(ObjectCategory::Monitor);
    let n = monitors.len() as f64;
    for (i, monitor) in monitors.iter().enumerate() {
        let width = monitor.scale[0];
        let total = n * width + (n - 1.0) * MONITOR_SPACING;
        let start_x = desk.x - total / 2.0 + width / 2.0;
        plan.insert(
            &monitor.id,
            upright([
                start_x + i as f64 * (width + MONITOR_SPACING),
                desk.top + MONITOR_BASE_OFFSET,
                desk.back + MONITOR_BACK_INSET,
            ]),
        );
    }
}

fn place_monitor_stands(ctx: &RuleContext<'_>, plan: &mut ArrangementPlan) {
    let desk = ctx.desk;
    let monitors = ctx.of(ObjectCategory::Monitor);
    for (i, stand) in ctx.of(ObjectCategory::MonitorStand).iter().enumerate() {
        let under = monitors.get(i).and_then(|m| plan.get(&m.id));
        let (x, z) = match under {
            Some(p) => (p.position[0], p.position[2]),
            None => (0.0, desk.back + MONITOR_BACK_INSET),
        };
        plan.insert(&stand.id, upright([x, desk.top + stand.scale[1] / 2.0, z]));
    }
}

fn place_keyboards(ctx: &RuleContext<'_>, plan: &mut ArrangementPlan) {
    let desk = ctx.desk;
    let monitors = ctx.of(ObjectCategory::Monitor);
    for (i, keyboard) in ctx.of(ObjectCategory::Keyboard).iter().enumerate() {
        let x = monitors
            .get(i)
            .and_then(|m| plan.get(&m.id))
            .map_or(0.0, |p| p.position[0]);
        plan.insert(
            &keyboard.id,
            upright([
                x,
                desk.top + keyboard.scale[1] / 2.0,
                desk.front - FRONT_ROW_INSET,
            ]),
        );
    }
}

fn place_mice(ctx: &RuleContext<'_>, plan: &mut ArrangementPlan) {
    let desk = ctx.desk;
    let keyboards = ctx.of(ObjectCategory::Keyboard);
    for (i, mouse) in ctx.of(ObjectCategory::Mouse).iter().enumerate() {
        let keyboard = keyboards.get(i);
        let kx = keyboard
            .and_then(|k| plan.get(&k.id))
            .map_or(0.0, |p| p.position[0]);
        let kw = keyboard.map_or(0.5, |k| k.scale[0]);
        plan.insert(
            &mouse.id,
            upright([
                kx + kw / 2.0 + mouse.scale[0] / 2.0 + 0.08,
                desk.top + mouse.scale[1] / 2.0,
                desk.front - FRONT_ROW_INSET,
            ]),
        );
    }
}

fn place_towers(ctx: &RuleContext<'_>, plan: &mut ArrangementPlan) {
    let desk = ctx.desk;
    let min_x = -ctx.room.width / 2.0 + ctx.config.wall_offset;
    for (i, tower) in ctx.of(ObjectCategory::PcTower).iter().enumerate() {
        let [w, h, _] = tower.scale;
        let x = (min_x + w / 2.0).max(desk.left - 0.4 - w / 2.0);
        plan.insert(
            &tower.id,
            turned([x, h / 2.0, desk.z + by_parity(i, -0.15, 0.15)], FRAC_PI_4),
        );
    }
}

fn place_speakers(ctx: &RuleContext<'_>, plan: &mut ArrangementPlan) {
    let desk = ctx.desk;
    for (i, speaker) in ctx.of(ObjectCategory::Speaker).iter().enumerate() {
        let y = desk.top + speaker.scale[1] / 2.0;
        let (x, yaw) = by_parity(
            i,
            (desk.left + 0.25, FRAC_PI_2),
            (desk.right - 0.25, -FRAC_PI_2),
        );
        plan.insert(&speaker.id, turned([x, y, desk.back + 0.2], yaw));
    }
}

fn place_lamps(ctx: &RuleContext<'_>, plan: &mut ArrangementPlan) {
    let desk = ctx.desk;
    for (i, lamp) in ctx.of(ObjectCategory::Lamp).iter().enumerate() {
        let y = desk.top + lamp.scale[1] / 2.0;
        // only the first lamp gets the left corner
        let (x, yaw) = if i == 0 {
            (desk.left + 0.3, FRAC_PI_4)
        } else {
            (desk.right - 0.3, -FRAC_PI_4)
        };
        plan.insert(&lamp.id, turned([x, y, desk.front - 0.2], yaw));
    }
}

fn place_webcams(ctx: &RuleContext<'_>, plan: &mut ArrangementPlan) {
    let monitors = ctx.of(ObjectCategory::Monitor);
    for (i, webcam) in ctx.of(ObjectCategory::Webcam).iter().enumerate() {
        // a webcam without a matching monitor keeps its position
        let Some(monitor) = monitors.get(i) else {
            continue;
        };
        let base = plan
            .get(&monitor.id)
            .map(|p| p.position)
            .unwrap_or([0.0, ctx.desk.top, ctx.desk.back + MONITOR_BACK_INSET]);
        plan.insert(
            &webcam.id,
            upright([
                base[0],
                base[1] + monitor.scale[1] / 2.0 + webcam.scale[1] / 2.0 + 0.01,
                base[2],
            ]),
        );
    }
}

fn place_microphones(ctx: &RuleContext<'_>, plan: &mut ArrangementPlan) {
    let desk = ctx.desk;
    for (i, mic) in ctx.of(ObjectCategory::Microphone).iter().enumerate() {
        plan.insert(
            &mic.id,
            turned(
                [
                    desk.right - 0.3,
                    desk.top + mic.scale[1] / 2.0,
                    desk.front - 0.3 - i as f64 * 0.2,
                ],
                FRAC_PI_2,
            ),
        );
    }
}

fn place_accessories(ctx: &RuleContext<'_>, plan: &mut ArrangementPlan) {
    const SPACING: f64 = 0.15;
    const ROW_DEPTH: f64 = 0.2;

    let desk = ctx.desk;
    let row_start = desk.left + 0.3;
    let row_end = desk.right - 0.3;
    let z0 = desk.front - 0.5;

    let mut x = row_start;
    let mut row = 0.0;
    for item in ACCESSORIES.iter().flat_map(|&cat| ctx.of(cat)) {
        let [w, h, _] = item.scale;
        if x + w / 2.0 > row_end {
            row += 1.0;
            x = row_start;
        }
        plan.insert(&item.id, upright([x, desk.top + h / 2.0, z0 - row * ROW_DEPTH]));
        x += w + SPACING;
    }
}

fn place_headphones(ctx: &RuleContext<'_>, plan: &mut ArrangementPlan) {
    let desk = ctx.desk;
    for (i, headphones) in ctx.of(ObjectCategory::Headphones).iter().enumerate() {
        plan.insert(
            &headphones.id,
            turned(
                [
                    desk.right - 0.25,
                    desk.top + headphones.scale[1] / 2.0,
                    desk.back + 0.3 + i as f64 * 0.2,
                ],
                FRAC_PI_2,
            ),
        );
    }
}

fn place_plants(ctx: &RuleContext<'_>, plan: &mut ArrangementPlan) {
    let desk = ctx.desk;
    for (i, plant) in ctx.of(ObjectCategory::Plant).iter().enumerate() {
        let h = plant.scale[1];
        let position = if i == 0 {
            [desk.left + 0.3, desk.top + h / 2.0, desk.back + 0.25]
        } else {
            // the rest stand on the floor right of the desk
            [desk.right + 0.4, h / 2.0, desk.z + by_parity(i, -0.25, 0.25)]
        };
        plan.insert(&plant.id, upright(position));
    }
}

fn place_clocks(ctx: &RuleContext<'_>, plan: &mut ArrangementPlan) {
    let desk = ctx.desk;
    for clock in ctx.of(ObjectCategory::Clock) {
        plan.insert(
            &clock.id,
            turned([desk.right + 0.6, desk.top + 0.6, desk.z], -FRAC_PI_2),
        );
    }
}

fn place_posters(ctx: &RuleContext<'_>, plan: &mut ArrangementPlan) {
    let desk = ctx.desk;
    for (i, poster) in ctx.of(ObjectCategory::Poster).iter().enumerate() {
        let (dx, yaw) = by_parity(i, (-1.8, FRAC_PI_2), (1.8, -FRAC_PI_2));
        plan.insert(
            &poster.id,
            turned([desk.x + dx, desk.top + 0.8, desk.z], yaw),
        );
    }
}

fn place_shelves(ctx: &RuleContext<'_>, plan: &mut ArrangementPlan) {
    let desk = ctx.desk;
    for (i, shelf) in ctx.of(ObjectCategory::Shelf).iter().enumerate() {
        let (dx, yaw) = by_parity(i, (-1.5, FRAC_PI_2), (1.5, -FRAC_PI_2));
        let y = desk.top + 0.5 + (i % 3) as f64 * 0.35;
        plan.insert(&shelf.id, turned([desk.x + dx, y, desk.z], yaw));
    }
}

fn place_cable_trays(ctx: &RuleContext<'_>, plan: &mut ArrangementPlan) {
    let desk = ctx.desk;
    for tray in ctx.of(ObjectCategory::CableTray) {
        plan.insert(&tray.id, upright([desk.x, -0.12, desk.back - 0.08]));
    }
}

fn place_chairs(ctx: &RuleContext<'_>, plan: &mut ArrangementPlan) {
    let desk = ctx.desk;
    let chairs = ctx.of(ObjectCategory::Chair);
    let n = chairs.len();
    let spacing = if n > 1 { 0.9 } else { 0.0 };
    let start_x = -((n as f64) - 1.0) * spacing / 2.0;
    for (i, chair) in chairs.iter().enumerate() {
        plan.insert(
            &chair.id,
            turned(
                [
                    desk.x + start_x + i as f64 * spacing,
                    chair.scale[1] / 2.0,
                    desk.front + 0.7,
                ],
                PI,
            ),
        );
    }
}
