//! Spell effects on the world.

use tracing::debug;

use super::Spell;
use crate::error::RulesError;
use crate::world_state::WorldState;

/// What a cast did, for whoever needs to react to it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpellOutcome {
    Perceived,
    Seized,
    Released,
    Charged,
    TargetDestroyed,
    /// The spell was spoken but nothing changed.
    Fizzled,
}

/// The result of casting a spell: the boxed text shown to the player.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpellEffect {
    pub spell: Spell,
    pub outcome: SpellOutcome,
    pub description: String,
}

impl SpellEffect {
    fn new(spell: Spell, outcome: SpellOutcome, lines: &[String]) -> Self {
        Self {
            spell,
            outcome,
            description: boxed(lines),
        }
    }
}

/// Frame lines the way every spell reports itself.
pub fn boxed(lines: &[String]) -> String {
    let mut result = String::from("+--");
    for line in lines {
        result.push_str("\n|");
        result.push_str(line);
    }
    result.push_str("\n+--");
    result
}

/// Cast a spell in the current location.
pub fn cast(spell: Spell, world: &mut WorldState) -> Result<SpellEffect, RulesError> {
    let effect = match spell {
        Spell::Shta => cast_shta(world)?,
        Spell::Shak => cast_shak(world),
        Spell::Chai => cast_chai(world),
        Spell::Reho => cast_reho(world)?,
    };
    debug!(spell = spell.word(), outcome = ?effect.outcome, "spell cast");
    Ok(effect)
}

fn cast_shta(world: &WorldState) -> Result<SpellEffect, RulesError> {
    let location = world.current_location()?;
    let nature: Vec<String> = location.nature.iter().map(|n| n.to_string()).collect();
    let foci: Vec<String> = location.foci.iter().map(|f| f.to_string()).collect();

    let lines = vec![
        format!("Perception: {}", location.perception),
        format!("Nature: {}", nature.join(", ")),
        format!(
            "Foci: {}",
            if foci.is_empty() {
                "None".to_string()
            } else {
                foci.join(", ")
            }
        ),
    ];
    Ok(SpellEffect::new(Spell::Shta, SpellOutcome::Perceived, &lines))
}

fn cast_shak(world: &mut WorldState) -> SpellEffect {
    let familiar = &mut world.familiar;
    if familiar.toggle_seized() {
        let aura = match familiar.aura.charge() {
            Some(charge) => format!("Your aura holds {}.", charge),
            None => "Your aura is empty.".to_string(),
        };
        let lines = vec![
            format!("{}'s mind yields before your power.", familiar.name),
            aura,
        ];
        SpellEffect::new(Spell::Shak, SpellOutcome::Seized, &lines)
    } else {
        let lines = vec![format!("You release {}'s mind.", familiar.name)];
        SpellEffect::new(Spell::Shak, SpellOutcome::Released, &lines)
    }
}

fn cast_chai(world: &mut WorldState) -> SpellEffect {
    let familiar = &mut world.familiar;
    if !familiar.seized_by_player {
        return SpellEffect::new(Spell::Chai, SpellOutcome::Fizzled, &[no_aura()]);
    }

    if familiar.aura.charge_with(Spell::Chai) {
        let lines = vec![format!("Flame gathers in {}'s aura.", familiar.name)];
        SpellEffect::new(Spell::Chai, SpellOutcome::Charged, &lines)
    } else {
        let lines = vec![format!("Your aura already holds {}.", Spell::Chai)];
        SpellEffect::new(Spell::Chai, SpellOutcome::Fizzled, &lines)
    }
}

fn cast_reho(world: &mut WorldState) -> Result<SpellEffect, RulesError> {
    if !world.familiar.seized_by_player {
        return Ok(SpellEffect::new(Spell::Reho, SpellOutcome::Fizzled, &[no_aura()]));
    }
    if world.familiar.aura.is_empty() {
        let lines = vec!["Your aura is empty.".to_string()];
        return Ok(SpellEffect::new(Spell::Reho, SpellOutcome::Fizzled, &lines));
    }

    let name = world.familiar.name.clone();
    let location = world.current_location_mut()?;
    match location.foci.iter_mut().find(|focus| !focus.destroyed) {
        Some(focus) => {
            focus.destroyed = true;
            let lines = vec![format!(
                "The flame leaps from {} and consumes the {}.",
                name, focus.name
            )];
            world.familiar.aura.discharge();
            Ok(SpellEffect::new(
                Spell::Reho,
                SpellOutcome::TargetDestroyed,
                &lines,
            ))
        }
        None => {
            let lines = vec!["There is nothing here to strike.".to_string()];
            Ok(SpellEffect::new(Spell::Reho, SpellOutcome::Fizzled, &lines))
        }
    }
}

fn no_aura() -> String {
    "You have no aura to shape.".to_string()
}
