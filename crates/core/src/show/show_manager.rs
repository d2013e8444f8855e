use std::fs::{self, File};
use std::path::{Path, PathBuf};
use std::time::SystemTime;

use serde_json::{from_reader, to_writer_pretty};

use super::show::Show;
use crate::ConsoleError;

/// Loads and saves show files. The default directory is
/// `<documents>/lumen`, falling back to the current working
/// directory when the platform has no documents folder.
pub struct ShowManager {
    shows_directory: PathBuf,
    current_path: Option<PathBuf>,
}

impl ShowManager {
    pub fn new(shows_directory: Option<PathBuf>) -> Self {
        let shows_directory = shows_directory.unwrap_or_else(|| {
            dirs::document_dir()
                .map(|d| d.join("lumen"))
                .unwrap_or_else(|| PathBuf::from("."))
        });

        Self {
            shows_directory,
            current_path: None,
        }
    }

    pub fn shows_directory(&self) -> &Path {
        &self.shows_directory
    }

    pub fn current_path(&self) -> Option<&Path> {
        self.current_path.as_deref()
    }

    /// Save a show to its current path, deriving a fresh path from
    /// the show name on first save.
    pub fn save_show(&mut self, show: &mut Show) -> Result<PathBuf, ConsoleError> {
        show.modified_at = SystemTime::now();

        let path = if let Some(path) = &self.current_path {
            path.clone()
        } else {
            let sanitized_name = show.name.replace(' ', "_").to_lowercase();
            self.shows_directory
                .join(format!("{}.lumen", sanitized_name))
        };

        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        let file = File::create(&path)?;
        to_writer_pretty(file, show)?;
        log::info!("saved show \"{}\" to {}", show.name, path.display());

        self.current_path = Some(path.clone());
        Ok(path)
    }

    pub fn save_show_as(&mut self, show: &mut Show, path: PathBuf) -> Result<PathBuf, ConsoleError> {
        self.current_path = Some(path.clone());
        self.save_show(show)
    }

    pub fn load_show(&mut self, path: &Path) -> Result<Show, ConsoleError> {
        let file = File::open(path)?;
        let show: Show = from_reader(file)?;
        log::info!("loaded show \"{}\" from {}", show.name, path.display());

        self.current_path = Some(path.to_path_buf());
        Ok(show)
    }

    /// Start a fresh show, detaching from any previously loaded file.
    pub fn new_show(&mut self, name: String) -> Show {
        self.current_path = None;
        Show::new(name)
    }

    pub fn list_shows(&self) -> Result<Vec<PathBuf>, ConsoleError> {
        let entries = match fs::read_dir(&self.shows_directory) {
            Ok(entries) => entries,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(e.into()),
        };

        let mut shows = Vec::new();
        for entry in entries {
            let entry = entry?;
            let path = entry.path();
            if path.is_file() && path.extension().map_or(false, |ext| ext == "lumen") {
                shows.push(path);
            }
        }

        Ok(shows)
    }
}
