//! Integration test: play session -> save -> load
//!
//! A character that has leveled, shopped, and equipped gear must come back
//! from disk identical in every field.

use chronicles::character::progression::gain_experience;
use chronicles::items::equipment::{equip_armor, equip_weapon};
use chronicles::items::inventory::{add_item, use_item};
use chronicles::items::shop::purchase_item;
use chronicles::persistence::{decode, encode};
use chronicles::{
    create_character, Catalog, CharacterClass, CharacterManager, CharacterRecord, GameError,
    SaveConfig,
};
use std::fs;
use tempfile::TempDir;

const CATALOG: &str = r#"{
    "health_potion": {"type": "consumable", "effect": "health:20", "cost": 25, "name": "Health Potion"},
    "oak_staff":     {"type": "weapon", "effect": "magic:8", "cost": 30, "name": "Oak Staff"},
    "silk_robe":     {"type": "armor", "effect": "max_health:5", "cost": 20, "name": "Silk Robe"},
    "lucky_charm":   {"type": "consumable", "effect": "luck:5", "cost": 10, "name": "Lucky Charm"}
}"#;

fn manager() -> (TempDir, CharacterManager) {
    let dir = tempfile::tempdir().unwrap();
    let manager = CharacterManager::new(&SaveConfig::new(dir.path()));
    (dir, manager)
}

fn seasoned_mage() -> CharacterRecord {
    let catalog = Catalog::from_json_str(CATALOG).unwrap();
    let mut hero = create_character("Aria", "Mage").unwrap();

    gain_experience(&mut hero, 420).unwrap();
    for id in ["oak_staff", "silk_robe", "health_potion", "health_potion"] {
        purchase_item(&mut hero, id, &catalog).unwrap();
    }
    equip_weapon(&mut hero, "oak_staff", &catalog).unwrap();
    equip_armor(&mut hero, "silk_robe", &catalog).unwrap();
    hero.health -= 17;
    hero.active_quests = vec!["find_the_orb".to_string(), "tame_the_wyvern".to_string()];
    hero.completed_quests = vec!["tutorial".to_string()];
    hero
}

#[test]
fn test_roundtrip_through_disk() {
    let (_dir, manager) = manager();
    let hero = seasoned_mage();

    manager.save_character(&hero).unwrap();
    let loaded = manager.load_character("Aria").unwrap();

    assert_eq!(loaded, hero);
    assert_eq!(loaded.equipment.weapon.as_deref(), Some("oak_staff"));
    assert_eq!(loaded.inventory.len(), 2);
}

#[test]
fn test_extra_stat_from_consumable_survives_save() {
    let (_dir, manager) = manager();
    let catalog = Catalog::from_json_str(CATALOG).unwrap();
    let mut hero = create_character("Pip", "Rogue").unwrap();
    add_item(&mut hero, "lucky_charm").unwrap();
    add_item(&mut hero, "lucky_charm").unwrap();

    assert_eq!(
        use_item(&mut hero, "lucky_charm", &catalog).unwrap(),
        "Used Lucky Charm, luck increased by 5"
    );
    use_item(&mut hero, "lucky_charm", &catalog).unwrap();
    assert!(hero.inventory.is_empty());

    let path = manager.save_character(&hero).unwrap();
    assert!(fs::read_to_string(path).unwrap().contains("EXTRA_STATS: luck=10\n"));

    let loaded = manager.load_character("Pip").unwrap();
    assert_eq!(loaded.extra_stats.get("luck"), Some(&10));
    assert_eq!(loaded, hero);
}

#[test]
fn test_roundtrip_fresh_characters_of_every_class() {
    let (_dir, manager) = manager();
    for class in CharacterClass::all() {
        let name = format!("Fresh{}", class);
        let hero = CharacterRecord::new(name.clone(), class);
        manager.save_character(&hero).unwrap();
        assert_eq!(manager.load_character(&name).unwrap(), hero);
    }
    assert_eq!(manager.list_characters().unwrap().len(), 4);
}

#[test]
fn test_roundtrip_dead_character() {
    let mut hero = seasoned_mage();
    hero.health = -12;
    assert_eq!(decode(&encode(&hero).unwrap()).unwrap(), hero);
}

#[test]
fn test_saved_file_layout() {
    let (_dir, manager) = manager();
    let hero = create_character("Bryn", "Cleric").unwrap();
    let path = manager.save_character(&hero).unwrap();

    assert!(path.ends_with("Bryn_save.txt"));
    let contents = fs::read_to_string(path).unwrap();
    let keys: Vec<&str> = contents
        .lines()
        .map(|line| line.split(':').next().unwrap())
        .collect();
    assert_eq!(
        keys,
        vec![
            "NAME",
            "CLASS",
            "LEVEL",
            "HEALTH",
            "MAX_HEALTH",
            "STRENGTH",
            "MAGIC",
            "EXPERIENCE",
            "GOLD",
            "EQUIPPED_WEAPON",
            "EQUIPPED_ARMOR",
            "EXTRA_STATS",
            "INVENTORY",
            "ACTIVE_QUESTS",
            "COMPLETED_QUESTS",
        ]
    );
    assert!(contents.contains("CLASS: Cleric\n"));
    assert!(contents.contains("INVENTORY: \n"));
}

#[test]
fn test_legacy_twelve_line_save_loads() {
    let (_dir, manager) = manager();
    let legacy = "NAME: Old\n\
        CLASS: Rogue\n\
        LEVEL: 4\n\
        HEALTH: 100\n\
        MAX_HEALTH: 120\n\
        STRENGTH: 18\n\
        MAGIC: 16\n\
        EXPERIENCE: 12\n\
        GOLD: 250\n\
        INVENTORY: lockpick,lockpick\n\
        ACTIVE_QUESTS: \n\
        COMPLETED_QUESTS: heist\n";
    fs::write(manager.save_dir().join("Old_save.txt"), legacy).unwrap();

    let hero = manager.load_character("Old").unwrap();
    assert_eq!(hero.class, CharacterClass::Rogue);
    assert_eq!(hero.level, 4);
    assert_eq!(hero.inventory, vec!["lockpick".to_string(), "lockpick".to_string()]);
    assert!(hero.active_quests.is_empty());
    assert_eq!(hero.completed_quests, vec!["heist".to_string()]);
    assert!(hero.equipment.weapon.is_none());
}

#[test]
fn test_tampered_save_is_rejected() {
    let (_dir, manager) = manager();
    let path = manager.save_character(&seasoned_mage()).unwrap();
    let contents = fs::read_to_string(&path).unwrap();
    fs::write(&path, contents.replace("LEVEL: ", "LEVEL: x")).unwrap();

    assert!(matches!(
        manager.load_character("Aria"),
        Err(GameError::InvalidSaveData(_))
    ));
}

#[test]
fn test_file_cut_at_line_boundary_is_rejected() {
    let (_dir, manager) = manager();
    let path = manager.save_character(&seasoned_mage()).unwrap();
    let contents = fs::read_to_string(&path).unwrap();
    let cut: String = contents.lines().take(10).map(|l| format!("{}\n", l)).collect();
    fs::write(&path, cut).unwrap();

    assert!(matches!(
        manager.load_character("Aria"),
        Err(GameError::InvalidSaveData(_))
    ));
}

#[test]
fn test_delete_then_load_is_not_found() {
    let (_dir, manager) = manager();
    manager.save_character(&seasoned_mage()).unwrap();
    manager.delete_character("Aria").unwrap();
    assert!(matches!(
        manager.load_character("Aria"),
        Err(GameError::CharacterNotFound(_))
    ));
    assert!(manager.list_characters().unwrap().is_empty());
}
