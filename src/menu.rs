///! Interactive menu loop dispatching the ledger operations
use std::path::PathBuf;
use std::str::FromStr;

use log::info;

use crate::console;
use crate::datatypes::DataError;
use crate::file_store::FileStore;
use crate::store::AssetStore;

/// Menu options, matched against the exact operator input `"1"`-`"5"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Add,
    View,
    Update,
    Delete,
    Exit,
}

impl FromStr for MenuChoice {
    type Err = DataError;

    fn from_str(s: &str) -> Result<MenuChoice, DataError> {
        match s {
            "1" => Ok(MenuChoice::Add),
            "2" => Ok(MenuChoice::View),
            "3" => Ok(MenuChoice::Update),
            "4" => Ok(MenuChoice::Delete),
            "5" => Ok(MenuChoice::Exit),
            other => Err(DataError::InvalidSelection(format!(
                "invalid option: {}",
                other
            ))),
        }
    }
}

/// Owns the working directory handle and the default store. Add and the
/// final save on exit act on the default store; view, update and delete
/// each load a private store from the file they select, so exactly one
/// current-file context governs every save.
pub struct CommandLoop {
    files: FileStore,
    store: AssetStore,
}

impl CommandLoop {
    /// Loads the default store up front. A broken default file is
    /// reported and replaced by an empty store; the program keeps going.
    pub fn new(files: FileStore) -> CommandLoop {
        let default_path = files.default_path();
        let store = match files.load(&default_path) {
            Ok(store) => store,
            Err(err) => {
                console::warn(&format!(
                    "could not load {}: {}",
                    default_path.display(),
                    err
                ));
                AssetStore::new()
            }
        };
        CommandLoop { files, store }
    }

    pub fn run(&mut self) {
        loop {
            console::clear_screen();
            print!("{}", console::render_dashboard(self.store.count()));
            let input = console::prompt("Choose an option");
            match MenuChoice::from_str(input.trim()) {
                Ok(MenuChoice::Add) => self.add_asset(),
                Ok(MenuChoice::View) => self.view_assets(),
                Ok(MenuChoice::Update) => self.update_asset(),
                Ok(MenuChoice::Delete) => self.delete_asset(),
                Ok(MenuChoice::Exit) => {
                    self.exit();
                    return;
                }
                Err(err) => console::warn(&err.to_string()),
            }
            console::pause();
        }
    }

    /// Collect one new asset into the default store, then save the store
    /// snapshot to an operator-chosen destination.
    fn add_asset(&mut self) {
        let article_name = console::prompt_non_empty("Article name");
        let model = console::prompt_non_empty("Model");
        let quantity = console::prompt_quantity("Quantity");
        let unit_price = console::prompt_price("Unit price");
        let country = console::prompt_country("Country of origin (3 letters)");

        let asset = match self
            .store
            .add(&article_name, &model, quantity, unit_price, country)
        {
            Ok(asset) => asset,
            Err(err) => {
                console::warn(&err.to_string());
                return;
            }
        };
        println!("Added asset: {}", asset);
        info!("added asset {}", asset.article_number);

        match self.choose_save_destination() {
            Ok(path) => match self.files.save(&path, &self.store) {
                Ok(()) => println!("Saved {} assets to {}", self.store.count(), path.display()),
                Err(err) => console::warn(&err.to_string()),
            },
            Err(err) => console::warn(&err.to_string()),
        }
    }

    fn view_assets(&self) {
        let (store, path) = match self.load_chosen_store() {
            Ok(loaded) => loaded,
            Err(err) => {
                console::warn(&err.to_string());
                return;
            }
        };
        if store.is_empty() {
            console::warn("no assets found");
            return;
        }
        println!("Assets in {}:", path.display());
        print!("{}", console::render_table(store.assets()));
        println!("{} assets on file", store.count());
    }

    fn update_asset(&self) {
        let (mut store, path) = match self.load_chosen_store() {
            Ok(loaded) => loaded,
            Err(err) => {
                console::warn(&err.to_string());
                return;
            }
        };
        if store.is_empty() {
            console::warn("no assets found");
            return;
        }
        print!("{}", console::render_table(store.assets()));

        let number = console::prompt("Article number to update");
        if store.find(&number).is_none() {
            console::warn(&format!("no asset with article number {}", number.trim()));
            return;
        }
        let article_name = console::prompt_non_empty("New article name");
        let model = console::prompt_non_empty("New model");
        let quantity = console::prompt_quantity("New quantity");
        let unit_price = console::prompt_price("New unit price");
        let country = console::prompt_country("New country of origin (3 letters)");

        let updated = store
            .update(&number, &article_name, &model, quantity, unit_price, country)
            .cloned();
        match updated {
            Ok(asset) => {
                println!("Updated asset: {}", asset);
                info!("updated asset {} in {}", asset.article_number, path.display());
                match self.files.save(&path, &store) {
                    Ok(()) => println!("Saved to {}", path.display()),
                    Err(err) => console::warn(&err.to_string()),
                }
            }
            Err(err) => console::warn(&err.to_string()),
        }
    }

    fn delete_asset(&self) {
        let (mut store, path) = match self.load_chosen_store() {
            Ok(loaded) => loaded,
            Err(err) => {
                console::warn(&err.to_string());
                return;
            }
        };
        if store.is_empty() {
            console::warn("no assets found");
            return;
        }
        print!("{}", console::render_table(store.assets()));

        let number = console::prompt("Article number to delete");
        let target = match store.find(&number) {
            Some(asset) => asset.clone(),
            None => {
                console::warn(&format!("no asset with article number {}", number.trim()));
                return;
            }
        };
        println!("Asset to delete:");
        print!("{}", console::render_table(std::slice::from_ref(&target)));
        let answer = console::prompt("Delete this asset? (y/n)");
        if !console::parse_confirmation(&answer) {
            println!("Deletion cancelled");
            return;
        }
        store.remove(&target);
        info!("deleted asset {} from {}", target.article_number, path.display());
        match self.files.save(&path, &store) {
            Ok(()) => println!("Deleted {}", target.article_number),
            Err(err) => console::warn(&err.to_string()),
        }
    }

    /// Final save of the default store, then the loop ends.
    fn exit(&self) {
        let path = self.files.default_path();
        match self.files.save(&path, &self.store) {
            Ok(()) => println!("Saved {}. Goodbye!", path.display()),
            Err(err) => console::warn(&err.to_string()),
        }
    }

    /// File selection for view/update/delete: list existing files, read a
    /// 1-based choice, load a private store from the picked file. A
    /// broken file is reported and degrades to an empty store.
    fn load_chosen_store(&self) -> Result<(AssetStore, PathBuf), DataError> {
        let path = self.choose_existing_file()?;
        let store = match self.files.load(&path) {
            Ok(store) => store,
            Err(err) => {
                console::warn(&format!("could not load {}: {}", path.display(), err));
                AssetStore::new()
            }
        };
        Ok((store, path))
    }

    fn choose_existing_file(&self) -> Result<PathBuf, DataError> {
        let names = self.files.list_json_files()?;
        if names.is_empty() {
            return Err(DataError::NoAssetFiles);
        }
        for (i, name) in names.iter().enumerate() {
            println!("{}. {}", i + 1, name);
        }
        let input = console::prompt("Choose a file");
        let idx = console::parse_selection(&input, names.len())?;
        Ok(self.files.path_of(&names[idx]))
    }

    /// Add alone may write somewhere other than the default file.
    fn choose_save_destination(&self) -> Result<PathBuf, DataError> {
        println!("Save to:");
        println!("1. Default file (assets.json)");
        println!("2. An existing file");
        println!("3. A new file");
        let input = console::prompt("Choose a destination");
        match console::parse_selection(&input, 3)? {
            0 => Ok(self.files.default_path()),
            1 => self.choose_existing_file(),
            _ => {
                let base = console::prompt_non_empty("New file name (without extension)");
                Ok(self.files.path_for(&base))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use std::fs;

    #[test]
    fn empty_directory_reports_no_asset_files() {
        let dir = env::temp_dir().join(format!("assetbook-menu-empty-{}", std::process::id()));
        let _ = fs::remove_dir_all(&dir);
        let files = FileStore::new(dir).unwrap();
        let menu = CommandLoop::new(files);
        let result = menu.choose_existing_file();
        assert!(matches!(result, Err(DataError::NoAssetFiles)));
    }

    #[test]
    fn menu_choice_exact_match() {
        assert_eq!(MenuChoice::from_str("1").unwrap(), MenuChoice::Add);
        assert_eq!(MenuChoice::from_str("2").unwrap(), MenuChoice::View);
        assert_eq!(MenuChoice::from_str("3").unwrap(), MenuChoice::Update);
        assert_eq!(MenuChoice::from_str("4").unwrap(), MenuChoice::Delete);
        assert_eq!(MenuChoice::from_str("5").unwrap(), MenuChoice::Exit);
        assert!(matches!(
            MenuChoice::from_str("6"),
            Err(DataError::InvalidSelection(_))
        ));
        assert!(matches!(
            MenuChoice::from_str("add"),
            Err(DataError::InvalidSelection(_))
        ));
        assert!(matches!(
            MenuChoice::from_str(""),
            Err(DataError::InvalidSelection(_))
        ));
    }
}
