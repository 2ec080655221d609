use rocket::fs::{FileServer, NamedFile};
use rocket::{Build, Rocket, State};

use crate::config::ServeConfig;

#[get("/")]
async fn index(config: &State<ServeConfig>) -> Option<NamedFile> {
    let path = config.entry_path();
    match NamedFile::open(&path).await {
        Ok(file) => Some(file),
        Err(e) => {
            log::warn!("cannot open entry document {}: {}", path.display(), e);
            None
        }
    }
}

#[get("/health_check")]
fn health_check() -> &'static str {
    "ok"
}

pub fn get_page_routes() -> Vec<rocket::Route> {
    routes![index, health_check]
}

/// Rocket instance for `config`. The static root must already be validated.
pub fn build(config: ServeConfig) -> Rocket<Build> {
    let figment = rocket::Config::figment()
        .merge(("address", config.address))
        .merge(("port", config.port));
    let files = FileServer::from(&config.static_root).rank(10);

    rocket::custom(figment)
        .mount("/", get_page_routes())
        .mount("/", files)
        .manage(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rocket::http::{ContentType, Status};
    use rocket::local::blocking::Client;
    use std::fs;

    const ENTRY: &str = "<!doctype html><title>Solar System</title>";

    fn site() -> tempfile::TempDir {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir_all(dir.path().join("views")).unwrap();
        fs::create_dir_all(dir.path().join("image")).unwrap();
        fs::write(dir.path().join("views/enter.html"), ENTRY).unwrap();
        fs::write(dir.path().join("image/earth.jpg"), [0xff, 0xd8, 0xff]).unwrap();
        fs::write(dir.path().join("textures.json"), r#"{"textures":{}}"#).unwrap();
        dir
    }

    fn client(dir: &tempfile::TempDir) -> Client {
        let config = ServeConfig {
            static_root: dir.path().to_path_buf(),
            ..ServeConfig::default()
        };
        Client::tracked(build(config)).unwrap()
    }

    #[test]
    fn root_serves_entry_document() {
        let dir = site();
        let client = client(&dir);
        let response = client.get("/").dispatch();
        assert_eq!(response.status(), Status::Ok);
        assert_eq!(response.content_type(), Some(ContentType::HTML));
        assert_eq!(response.into_string().unwrap(), ENTRY);
    }

    #[test]
    fn assets_come_from_static_root() {
        let dir = site();
        let client = client(&dir);

        let texture = client.get("/image/earth.jpg").dispatch();
        assert_eq!(texture.status(), Status::Ok);
        assert_eq!(texture.content_type(), Some(ContentType::JPEG));

        let manifest = client.get("/textures.json").dispatch();
        assert_eq!(manifest.status(), Status::Ok);
        assert_eq!(manifest.content_type(), Some(ContentType::JSON));
    }

    #[test]
    fn unknown_path_is_not_found() {
        let dir = site();
        let client = client(&dir);
        assert_eq!(client.get("/image/vulcan.jpg").dispatch().status(), Status::NotFound);
    }

    #[test]
    fn missing_entry_document_is_not_found() {
        let dir = site();
        fs::remove_file(dir.path().join("views/enter.html")).unwrap();
        let client = client(&dir);
        assert_eq!(client.get("/").dispatch().status(), Status::NotFound);
    }

    #[test]
    fn health_check_answers_ok() {
        let dir = site();
        let client = client(&dir);
        let response = client.get("/health_check").dispatch();
        assert_eq!(response.status(), Status::Ok);
        assert_eq!(response.into_string().as_deref(), Some("ok"));
    }
}
