/// Preview image for a YouTube link, or `None` when no video id can be found.
pub fn thumbnail_url(video: &str) -> Option<String> {
    let id = if let Some((_, rest)) = video.split_once("v=") {
        rest.split('&').next()
    } else if let Some((_, rest)) = video.split_once("youtu.be/") {
        rest.split('?').next()
    } else {
        None
    }?;

    if id.is_empty() {
        return None;
    }
    Some(format!("https://img.youtube.com/vi/{id}/hqdefault.jpg"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn watch_url_drops_extra_params() {
        assert_eq!(
            thumbnail_url("https://www.youtube.com/watch?v=ml6cT4AZdqI&t=42s").as_deref(),
            Some("https://img.youtube.com/vi/ml6cT4AZdqI/hqdefault.jpg")
        );
    }

    #[test]
    fn short_url_drops_query() {
        assert_eq!(
            thumbnail_url("https://youtu.be/UItWltVZZmE?si=share").as_deref(),
            Some("https://img.youtube.com/vi/UItWltVZZmE/hqdefault.jpg")
        );
    }

    #[test]
    fn unknown_urls_have_no_thumbnail() {
        assert_eq!(thumbnail_url("https://vimeo.com/12345"), None);
        assert_eq!(thumbnail_url("https://www.youtube.com/watch?v="), None);
    }
}
