use std::env;
use std::fs;

use assetbook::datatypes::CountryCode;
use assetbook::file_store::FileStore;

fn fresh_working_dir(tag: &str) -> FileStore {
    let dir = env::temp_dir().join(format!(
        "assetbook-it-{}-{}",
        tag,
        std::process::id()
    ));
    let _ = fs::remove_dir_all(&dir);
    FileStore::new(dir).expect("working directory")
}

#[test]
fn first_asset_roundtrips_through_default_file() {
    let files = fresh_working_dir("first-asset");
    let path = files.default_path();

    // empty working directory: the default file does not exist yet
    let mut store = files.load(&path).expect("load of missing file");
    assert!(store.is_empty());

    let added = store
        .add("Laptop", "X1", 3, 999.99, CountryCode::new("SWE").unwrap())
        .expect("add");
    assert_eq!(
        added.to_string(),
        "ATS0001 | Laptop | X1 | 3 | $999.99 | $2999.97 | SWE"
    );

    files.save(&path, &store).expect("save");

    let reloaded = files.load(&path).expect("reload");
    assert_eq!(reloaded.count(), 1);
    let asset = &reloaded.assets()[0];
    assert_eq!(asset, &added);
    assert_eq!(asset.article_number.to_string(), "ATS0001");
    assert_eq!(asset.total_price(), added.total_price());
    // the next add continues the sequence
    assert_eq!(reloaded.next_sequence(), 2);
}

#[test]
fn malformed_default_file_degrades_to_empty_store() {
    let files = fresh_working_dir("malformed");
    let path = files.default_path();
    fs::write(&path, "THIS IS NOT JSON").expect("seed broken file");

    // load reports the malformed content as an error carrying the cause;
    // the menu boundary then continues with an empty store
    let err = files.load(&path).expect_err("malformed file");
    assert!(err.to_string().contains("JSON"));
}

#[test]
fn stored_file_is_indented_json() {
    let files = fresh_working_dir("indented");
    let path = files.default_path();
    let mut store = files.load(&path).expect("load");
    store
        .add("Laptop", "X1", 3, 999.99, CountryCode::new("SWE").unwrap())
        .expect("add");
    files.save(&path, &store).expect("save");

    let content = fs::read_to_string(&path).expect("read back");
    // indented array of objects with stable camelCase field names
    assert!(content.starts_with("[\n"));
    assert!(content.contains("\"articleNumber\": \"ATS0001\""));
    assert!(content.contains("\"totalPrice\""));
}
