use std::fs;

use chrono::{TimeZone, Utc};
use tempfile::tempdir;

use shotengai_core::catalog::{classic_catalog, modern_catalog, Catalog, ProductKind};
use shotengai_core::errors::LedgerError;
use shotengai_core::ids::CounterIds;
use shotengai_core::ledger::{LedgerPolicy, Player};
use shotengai_core::services::TradeService;
use shotengai_core::time::ManualClock;

#[test]
fn load_from_path_round_trips_the_built_in_catalogs() {
    let dir = tempdir().unwrap();
    for (file_name, catalog) in [
        ("classic.json", classic_catalog()),
        ("modern.json", modern_catalog()),
    ] {
        let path = dir.path().join(file_name);
        fs::write(&path, serde_json::to_string_pretty(catalog).unwrap()).unwrap();

        let loaded = Catalog::load_from_path(&path).unwrap();
        assert_eq!(&loaded, catalog);
    }
}

#[test]
fn malformed_catalog_json_reports_a_serde_error() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("broken.json");
    fs::write(&path, "{ \"shops\": [ { \"id\": ").unwrap();

    let err = Catalog::load_from_path(&path).expect_err("truncated JSON must fail");
    assert!(matches!(err, LedgerError::Serde(_)));
}

#[test]
fn missing_catalog_file_reports_an_io_error() {
    let dir = tempdir().unwrap();
    let err = Catalog::load_from_path(&dir.path().join("missing.json"))
        .expect_err("absent file must fail");
    assert!(matches!(err, LedgerError::Io(_)));
}

#[test]
fn a_catalog_loaded_from_disk_drives_purchases() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("street.json");
    fs::write(
        &path,
        r#"{
            "shops": [
                {
                    "id": "kiosk",
                    "name": "Kiosk",
                    "products": [
                        { "id": "paper", "name": "Newspaper", "price": 150, "type": "expense" },
                        { "id": "stand", "name": "News stand", "price": 20000, "type": "asset" }
                    ]
                }
            ]
        }"#,
    )
    .unwrap();

    let catalog = Catalog::load_from_path(&path).unwrap();
    assert_eq!(catalog.product_count(), 2);

    let mut player = Player::standard_seed("player1", "Player");
    let mut ids = CounterIds::new();
    let clock = ManualClock::starting_at(Utc.with_ymd_and_hms(2024, 4, 1, 9, 0, 0).unwrap());

    let stand = catalog.find_product("kiosk", "stand").unwrap();
    assert_eq!(stand.kind, ProductKind::Asset);
    let outcome =
        TradeService::purchase(&mut player, stand, &LedgerPolicy::default(), &mut ids, &clock)
            .unwrap();

    assert_eq!(outcome.entry_id, "stand_1");
    assert_eq!(player.money, 80_000);
    assert_eq!(player.total_assets(), 100_000);
}
