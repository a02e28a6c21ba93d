use crate::model::{Category, Episode, Movie, Series};
use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};
use quick_xml::Writer;
use shared::error::{io_err, PluginError};
use shared::utils::{clean_title, extract_genres, xml_escape, UNKNOWN_NAME};
use std::io::Cursor;

const EPISODE_FALLBACK_TITLE: &str = "Episode";

type XmlWriter = Writer<Cursor<Vec<u8>>>;

fn write_text_element(writer: &mut XmlWriter, tag: &str, text: &str) -> Result<(), quick_xml::Error> {
    writer.write_event(Event::Start(BytesStart::new(tag)))?;
    writer.write_event(Event::Text(BytesText::from_escaped(xml_escape(text))))?;
    writer.write_event(Event::End(BytesEnd::new(tag)))?;
    Ok(())
}

fn write_optional_element(writer: &mut XmlWriter, tag: &str, text: Option<&str>) -> Result<(), quick_xml::Error> {
    match text.filter(|value| !value.is_empty()) {
        Some(value) => write_text_element(writer, tag, value),
        None => Ok(()),
    }
}

fn write_year(writer: &mut XmlWriter, year: Option<u32>) -> Result<(), quick_xml::Error> {
    match year.filter(|y| *y > 0) {
        Some(year) => write_text_element(writer, "year", &year.to_string()),
        None => Ok(()),
    }
}

fn write_genres(writer: &mut XmlWriter, category: Option<&Category>) -> Result<(), quick_xml::Error> {
    if let Some(category) = category {
        for genre in extract_genres(&category.name) {
            write_text_element(writer, "genre", &genre)?;
        }
    }
    Ok(())
}

fn write_root<F>(writer: &mut XmlWriter, root: &str, body: F) -> Result<(), quick_xml::Error>
where
    F: FnOnce(&mut XmlWriter) -> Result<(), quick_xml::Error>,
{
    writer.write_event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), Some("yes"))))?;
    writer.write_event(Event::Start(BytesStart::new(root)))?;
    body(writer)?;
    writer.write_event(Event::End(BytesEnd::new(root)))?;
    Ok(())
}

fn write_document<F>(root: &str, body: F) -> Result<Vec<u8>, PluginError>
where
    F: FnOnce(&mut XmlWriter) -> Result<(), quick_xml::Error>,
{
    let mut writer = Writer::new_with_indent(Cursor::new(Vec::new()), b' ', 4);
    write_root(&mut writer, root, body).map_err(|err| io_err!("Failed to create {root} nfo: {err}"))?;
    Ok(writer.into_inner().into_inner())
}

fn title_or(name: Option<&str>, fallback: &str) -> String {
    name.map(clean_title)
        .filter(|title| !title.is_empty())
        .unwrap_or_else(|| fallback.to_string())
}

/// Kodi style `.nfo` documents for the generated library.
pub struct NfoWriter;

impl NfoWriter {
    /// `<movie>` with title, year, genres, plot, rating and the catalog ids.
    pub fn movie(movie: &Movie, category: Option<&Category>) -> Result<Vec<u8>, PluginError> {
        write_document("movie", |writer| {
            write_text_element(writer, "title", &title_or(movie.name.as_deref(), UNKNOWN_NAME))?;
            write_year(writer, movie.year)?;
            write_genres(writer, category)?;
            write_optional_element(writer, "plot", movie.description.as_deref())?;
            write_optional_element(writer, "rating", movie.rating.as_deref())?;
            write_optional_element(writer, "tmdbid", movie.tmdb_id.as_deref())?;
            write_optional_element(writer, "imdbid", movie.imdb_id.as_deref())
        })
    }

    /// `tvshow.nfo` of a series folder.
    pub fn tvshow(series: &Series, category: Option<&Category>) -> Result<Vec<u8>, PluginError> {
        write_document("tvshow", |writer| {
            write_text_element(writer, "title", &title_or(series.name.as_deref(), UNKNOWN_NAME))?;
            write_year(writer, series.year)?;
            write_genres(writer, category)?;
            write_optional_element(writer, "plot", series.description.as_deref())
        })
    }

    pub fn episode(episode: &Episode) -> Result<Vec<u8>, PluginError> {
        write_document("episodedetails", |writer| {
            write_text_element(writer, "title", &title_or(episode.name.as_deref(), EPISODE_FALLBACK_TITLE))?;
            write_text_element(writer, "season", &episode.season().to_string())?;
            write_text_element(writer, "episode", &episode.episode().to_string())?;
            write_optional_element(writer, "plot", episode.description.as_deref())
        })
    }
}
