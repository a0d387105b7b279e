use std::collections::HashSet;

use mcpalette::{
    block_state::{Log, LogItem},
    material::{Material, Wood},
    util::Axis,
    BlockKind, InvalidState, ItemStack, ProtocolGeneration,
};
use proptest::prelude::*;

fn woods() -> impl Strategy<Value = Wood> {
    prop::sample::select(Wood::ALL)
}

fn axes() -> impl Strategy<Value = Axis> {
    prop::sample::select(Axis::ALL.to_vec())
}

#[test]
fn enumerates_every_state_once() {
    let states = Log::all_states();
    assert_eq!(states.len(), Axis::ALL.len() * 2 * Wood::ALL.len());
    assert_eq!(states.len(), 36);
    assert_eq!(states.iter().collect::<HashSet<_>>().len(), 36);
}

#[test]
fn enumeration_order_is_stable() {
    let states = Log::all_states();
    assert_eq!(states, Log::all_states());

    assert_eq!(states[0], Log::new(Wood::Oak, true, Axis::Y));
    assert_eq!(states[5], Log::new(Wood::DarkOak, true, Axis::Y));
    assert_eq!(states[6], Log::new(Wood::Oak, false, Axis::Y));
    assert_eq!(states[12], Log::new(Wood::Oak, true, Axis::Z));
    assert_eq!(states[24], Log::new(Wood::Oak, true, Axis::X));
    assert_eq!(states[35], Log::new(Wood::DarkOak, false, Axis::X));

    for (i, state) in states.iter().enumerate() {
        assert_eq!(state.axis().index() as usize, i / 12);
        assert_eq!(state.stripped(), i % 12 < 6);
        assert_eq!(state.wood(), Some(Wood::ALL[i % 6]));
    }
}

#[test]
fn names() {
    assert_eq!(Log::new(Wood::Oak, false, Axis::Y).name().unwrap(), "Oak Log");
    assert_eq!(
        Log::new(Wood::Oak, true, Axis::Y).name().unwrap(),
        "Stripped Oak Log",
    );
    assert_eq!(
        Log::new(Wood::DarkOak, true, Axis::X).name().unwrap(),
        "Stripped Dark Oak Log",
    );
    assert_eq!(
        Log::new(Wood::Acacia, false, Axis::Z).name().unwrap(),
        "Acacia Log",
    );
}

#[test]
fn drops_keep_species_and_strip_state() {
    let log = Log::new(Wood::Jungle, true, Axis::X);
    let drop = log.item_drop().unwrap();
    assert_eq!(
        drop,
        ItemStack::new(
            LogItem {
                wood: Wood::Jungle,
                stripped: true,
            },
            1,
        ),
    );
    assert_eq!(drop.count(), 1);
    assert_eq!(log.drops().unwrap(), vec![drop]);
}

#[test]
fn legacy_wire_form_partitions_species() {
    for log in Log::all_states() {
        let wood = log.wood().unwrap();
        let wire = log.to_wire(ProtocolGeneration::Legacy).unwrap();
        let (name, key) = match wood {
            Wood::Oak | Wood::Spruce | Wood::Birch | Wood::Jungle => ("minecraft:log", "old_log_type"),
            Wood::Acacia | Wood::DarkOak => ("minecraft:log2", "new_log_type"),
        };
        assert_eq!(wire.name, name);
        assert_eq!(wire.properties.len(), 2);
        assert_eq!(wire.properties[key], wood.legacy_name());
        assert_eq!(wire.properties["pillar_axis"], log.axis().to_string());
    }
}

#[test]
fn legacy_wire_form_literals() {
    let wire = Log::new(Wood::DarkOak, false, Axis::Z)
        .to_wire(ProtocolGeneration::Legacy)
        .unwrap();
    assert_eq!(wire.name, "minecraft:log2");
    assert_eq!(wire.properties["new_log_type"], "dark_oak");
    assert_eq!(wire.properties["pillar_axis"], "z");

    let wire = Log::new(Wood::Spruce, true, Axis::X)
        .to_wire(ProtocolGeneration::Legacy)
        .unwrap();
    assert_eq!(wire.name, "minecraft:log");
    assert_eq!(wire.properties["old_log_type"], "spruce");
    assert_eq!(wire.properties["pillar_axis"], "x");
}

#[test]
fn flattened_wire_form_is_unique_per_state() {
    let forms = Log::all_states()
        .iter()
        .map(|log| log.to_wire(ProtocolGeneration::Flattened).unwrap())
        .map(|wire| (wire.name.clone(), wire.properties["pillar_axis"].clone()))
        .collect::<HashSet<_>>();
    assert_eq!(forms.len(), 36);
    assert!(forms.contains(&("minecraft:stripped_dark_oak_log".to_owned(), "y".to_owned())));
    assert!(forms.contains(&("minecraft:birch_log".to_owned(), "x".to_owned())));
}

#[test]
fn unset_wood_fails_every_operation() {
    let expected = InvalidState {
        kind: "log",
        property: "wood type",
    };
    for axis in Axis::ALL {
        for stripped in [true, false] {
            let log = Log::from_parts(None, stripped, axis);
            assert_eq!(log.name(), Err(expected));
            assert_eq!(log.item(), Err(expected));
            assert_eq!(log.item_drop(), Err(expected));
            assert_eq!(log.drops(), Err(expected));
            for generation in ProtocolGeneration::ALL {
                assert_eq!(log.to_wire(generation), Err(expected));
            }
        }
    }
}

#[test]
fn reconstruction_keeps_other_fields() {
    let log = Log::new(Wood::Birch, false, Axis::Y);
    let turned = log.with_axis(Axis::X);
    assert_eq!(turned, Log::new(Wood::Birch, false, Axis::X));
    assert_eq!(turned.with_stripped(true), Log::new(Wood::Birch, true, Axis::X));
    assert_eq!(log.axis(), Axis::Y);
}

proptest! {
    #[test]
    fn drops_ignore_axis(wood in woods(), stripped in any::<bool>(), a in axes(), b in axes()) {
        let log = Log::new(wood, stripped, a);
        prop_assert_eq!(log.item_drop(), log.with_axis(b).item_drop());
        prop_assert_eq!(log.name(), log.with_axis(b).name());
    }

    #[test]
    fn legacy_axis_matches_canonical_form(wood in woods(), stripped in any::<bool>(), axis in axes()) {
        let wire = Log::new(wood, stripped, axis).to_wire(ProtocolGeneration::Legacy).unwrap();
        prop_assert_eq!(wire.properties["pillar_axis"].as_str(), axis.as_str());
    }
}
