/// Backend entities: playlists, albums, tracks and artists
pub mod entities;
/// MusicBingo backend client
pub mod musicbingo;

pub use musicbingo::MusicBingoClient;
