use std::fs::File;
use std::path::{Path, PathBuf};

pub const IO_BUFFER_SIZE: usize = 64 * 1024;

pub fn file_reader<R>(r: R) -> std::io::BufReader<R>
where
    R: std::io::Read,
{
    std::io::BufReader::with_capacity(IO_BUFFER_SIZE, r)
}

#[inline]
pub fn open_file(file_name: &Path) -> Result<File, std::io::Error> {
    File::open(file_name)
}

pub async fn path_exists(file_path: &Path) -> bool {
    tokio::fs::metadata(file_path).await.is_ok_and(|metadata| metadata.is_file())
}

pub async fn dir_exists(dir_path: &Path) -> bool {
    tokio::fs::metadata(dir_path).await.is_ok_and(|metadata| metadata.is_dir())
}

/// The immediate children of a directory, split into folders and files.
#[derive(Debug, Default)]
pub struct DirListing {
    pub dirs: Vec<PathBuf>,
    pub files: Vec<PathBuf>,
}

impl DirListing {
    pub fn file_names(&self) -> impl Iterator<Item = &str> {
        self.files.iter().filter_map(|p| p.file_name().and_then(|n| n.to_str()))
    }

    pub fn dir_names(&self) -> impl Iterator<Item = &str> {
        self.dirs.iter().filter_map(|p| p.file_name().and_then(|n| n.to_str()))
    }

    pub fn count_files_with_suffix(&self, suffix: &str) -> usize {
        self.files.iter()
            .filter(|p| p.extension().is_some_and(|ext| ext == suffix))
            .count()
    }
}

/// Reads a directory non recursively, entries sorted by name.
pub async fn read_dir_listing(path: &Path) -> tokio::io::Result<DirListing> {
    let mut listing = DirListing::default();
    let mut dir_read = tokio::fs::read_dir(path).await?;
    while let Some(entry) = dir_read.next_entry().await? {
        let file_type = entry.file_type().await?;
        if file_type.is_dir() {
            listing.dirs.push(entry.path());
        } else if file_type.is_file() {
            listing.files.push(entry.path());
        }
    }
    listing.dirs.sort();
    listing.files.sort();
    Ok(listing)
}
