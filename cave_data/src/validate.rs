use std::collections::{HashMap, HashSet};
use std::fmt;

use crate::*;

/// Validation error for malformed or missing references in a WorldDef.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    DuplicateId { kind: &'static str, id: String },
    MissingReference { kind: &'static str, id: String, context: String },
    InvalidValue { context: String },
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationError::DuplicateId { kind, id } => {
                write!(f, "duplicate {kind} id '{id}'")
            },
            ValidationError::MissingReference { kind, id, context } => {
                write!(f, "missing {kind} '{id}' ({context})")
            },
            ValidationError::InvalidValue { context } => {
                write!(f, "invalid value ({context})")
            },
        }
    }
}

impl std::error::Error for ValidationError {}

/// Validate cross-references and basic invariants in a WorldDef.
///
/// ```
/// use cave_data::{GameDef, RoomDef, WorldDef, validate_world};
///
/// let world = WorldDef {
///     game: GameDef {
///         title: "Demo".into(),
///         start_room: "Start".into(),
///         terminal_room: "Start".into(),
///         ..GameDef::default()
///     },
///     rooms: vec![RoomDef {
///         name: "Start".into(),
///         desc: "A room.".into(),
///         ..RoomDef::default()
///     }],
///     ..WorldDef::default()
/// };
/// assert!(validate_world(&world).is_empty());
/// ```
pub fn validate_world(world: &WorldDef) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    let mut rooms = HashSet::new();
    track_ids(
        "room",
        world.rooms.iter().map(|r| r.name.as_str()),
        &mut rooms,
        &mut errors,
    );

    for (field, room) in [
        ("start room", &world.game.start_room),
        ("terminal room", &world.game.terminal_room),
    ] {
        if room.trim().is_empty() {
            errors.push(ValidationError::InvalidValue {
                context: format!("game {field} missing"),
            });
        } else {
            check_ref("room", room, &rooms, format!("game {field}"), &mut errors);
        }
    }

    // every item starts out in exactly one room
    let mut item_homes: HashMap<&str, &str> = HashMap::new();
    for room in &world.rooms {
        for (direction, to) in &room.exits {
            check_ref(
                "room",
                to,
                &rooms,
                format!("room '{}' exit '{direction}'", room.name),
                &mut errors,
            );
        }
        for item in &room.items {
            if let Some(first) = item_homes.insert(item.as_str(), room.name.as_str()) {
                errors.push(ValidationError::InvalidValue {
                    context: format!("item '{item}' placed in both '{first}' and '{}'", room.name),
                });
            }
        }
    }

    for unlock in &world.unlocks {
        let context = format!("unlock '{}' in '{}'", unlock.item, unlock.room);
        check_ref("room", &unlock.room, &rooms, context.clone(), &mut errors);
        check_ref("room", &unlock.target, &rooms, context.clone(), &mut errors);
        if unlock.direction.trim().is_empty() {
            errors.push(ValidationError::InvalidValue {
                context: format!("{context}: empty direction"),
            });
        }
        if !item_homes.contains_key(unlock.item.as_str()) {
            errors.push(ValidationError::MissingReference {
                kind: "item",
                id: unlock.item.clone(),
                context,
            });
        }
    }

    errors
}

fn track_ids<'a>(
    kind: &'static str,
    ids: impl Iterator<Item = &'a str>,
    set: &mut HashSet<String>,
    errors: &mut Vec<ValidationError>,
) {
    for id in ids {
        if !set.insert(id.to_string()) {
            errors.push(ValidationError::DuplicateId {
                kind,
                id: id.to_string(),
            });
        }
    }
}

fn check_ref(kind: &'static str, id: &str, set: &HashSet<String>, context: String, errors: &mut Vec<ValidationError>) {
    if !set.contains(id) {
        errors.push(ValidationError::MissingReference {
            kind,
            id: id.to_string(),
            context,
        });
    }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use super::*;

    fn room(name: &str) -> RoomDef {
        RoomDef {
            name: name.to_string(),
            desc: "Test room".into(),
            ..RoomDef::default()
        }
    }

    fn base_world() -> WorldDef {
        WorldDef {
            game: GameDef {
                title: "Demo".into(),
                start_room: "start".into(),
                terminal_room: "start".into(),
                ..GameDef::default()
            },
            rooms: vec![room("start")],
            ..WorldDef::default()
        }
    }

    #[test]
    fn duplicate_ids_are_reported() {
        let mut world = base_world();
        world.rooms = vec![room("start"), room("start")];

        let errors = validate_world(&world);
        assert!(
            errors
                .iter()
                .any(|err| matches!(err, ValidationError::DuplicateId { kind, id } if *kind == "room" && id == "start"))
        );
    }

    #[test]
    fn dangling_exits_are_reported() {
        let mut world = base_world();
        world.rooms[0].exits = BTreeMap::from([("north".to_string(), "nowhere".to_string())]);

        let errors = validate_world(&world);
        assert!(errors.iter().any(|err| matches!(err, ValidationError::MissingReference { kind, id, .. } if *kind == "room" && id == "nowhere")));
    }

    #[test]
    fn missing_terminal_room_is_reported() {
        let mut world = base_world();
        world.game.terminal_room = String::new();

        let errors = validate_world(&world);
        assert_eq!(
            errors,
            vec![ValidationError::InvalidValue {
                context: "game terminal room missing".into()
            }]
        );
    }

    #[test]
    fn item_in_two_rooms_is_reported() {
        let mut world = base_world();
        world.rooms[0].items = vec!["Key".into()];
        let mut other = room("other");
        other.items = vec!["Key".into()];
        world.rooms.push(other);

        let errors = validate_world(&world);
        assert!(errors.iter().any(|err| matches!(err, ValidationError::InvalidValue { .. })));
    }

    #[test]
    fn unlock_rules_are_checked() {
        let mut world = base_world();
        world.unlocks = vec![UnlockDef {
            item: "Key".into(),
            room: "start".into(),
            direction: "south".into(),
            target: "vault".into(),
            message: "click".into(),
        }];

        let errors = validate_world(&world);
        assert!(errors.iter().any(|err| matches!(err, ValidationError::MissingReference { kind, id, .. } if *kind == "room" && id == "vault")));
        assert!(errors.iter().any(|err| matches!(err, ValidationError::MissingReference { kind, id, .. } if *kind == "item" && id == "Key")));
    }

    #[test]
    fn world_parses_from_toml() {
        let src = r#"
            [game]
            title = "Demo"
            start_room = "A"
            terminal_room = "B"

            [[rooms]]
            name = "A"
            desc = "First."
            exits = { north = "B" }
            items = ["Lamp"]

            [[rooms]]
            name = "B"
            desc = "Second."
        "#;
        let world: WorldDef = toml::from_str(src).expect("valid toml");
        assert_eq!(world.rooms.len(), 2);
        assert_eq!(world.rooms[0].exits.get("north").map(String::as_str), Some("B"));
        assert!(world.unlocks.is_empty());
        assert!(validate_world(&world).is_empty());
    }
}
