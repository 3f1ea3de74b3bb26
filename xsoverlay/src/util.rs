use models::{Result, User};

pub fn get_avatar_url(user: &User) -> Option<String> {
    user.avatar.as_ref().map(|hash| {
        format!(
            "https://cdn.discordapp.com/avatars/{}/{}.png?size=128",
            user.id, hash
        )
    })
}

pub async fn fetch_avatar(http: &reqwest::Client, url: &str) -> Result<Vec<u8>> {
    let response = http.get(url).send().await?.error_for_status()?;

    Ok(response.bytes().await?.to_vec())
}
