use crate::{
    error::{AppError, AppResult},
    models::{GroupGiftResponse, Recommendation, ShareResponse},
    services::enrichment::format_inr,
};

const WHATSAPP_SHARE: &str = "https://wa.me/?text=";
const MIN_PARTICIPANTS: u32 = 2;

fn whatsapp_link(message: &str) -> String {
    format!("{}{}", WHATSAPP_SHARE, urlencoding::encode(message))
}

fn email_link(subject: &str, body: &str) -> String {
    format!(
        "mailto:?subject={}&body={}",
        urlencoding::encode(subject),
        urlencoding::encode(body)
    )
}

/// Message and links for asking friends about a gift
pub fn share_gift(gift: &Recommendation, recipient_name: &str) -> ShareResponse {
    let message = format!(
        "Hey! I'm thinking of getting {} ({}) for {}. What do you think?\n\n\
         {}\n\n\
         Check it out:\n\
         Amazon: {}\n\
         Flipkart: {}\n\n\
         Would love your thoughts! 💭",
        gift.name, gift.price, recipient_name, gift.description, gift.amazon_link, gift.flipkart_link
    );
    let subject = format!("Gift suggestion for {}", recipient_name);

    ShareResponse {
        whatsapp_link: whatsapp_link(&message),
        email_link: email_link(&subject, &message),
        message,
    }
}

/// Splits a gift's price between participants, rounding each share up
pub fn amount_per_person(total: u32, participants: u32) -> u32 {
    total.div_ceil(participants.max(1))
}

/// Message and links for pooling money towards a gift
pub fn group_gift(
    gift: &Recommendation,
    recipient_name: &str,
    participants: u32,
) -> AppResult<GroupGiftResponse> {
    if participants < MIN_PARTICIPANTS {
        return Err(AppError::InvalidInput(format!(
            "A group gift needs at least {} participants",
            MIN_PARTICIPANTS
        )));
    }

    let per_person = amount_per_person(gift.numeric_price, participants);
    let per_person_text = format_inr(per_person);

    let message = format!(
        "🎁 Group Gift for {}!\n\n\
         Gift: {}\n\
         Total Cost: {}\n\
         Split among {} people: {} per person\n\n\
         {}\n\n\
         Shopping links:\n\
         • Amazon: {}\n\
         • Flipkart: {}\n\n\
         Let's make this gift happen together! 💝\n\n\
         Reply if you're in! 🙌",
        recipient_name,
        gift.name,
        gift.price,
        participants,
        per_person_text,
        gift.description,
        gift.amazon_link,
        gift.flipkart_link
    );
    let subject = format!(
        "Group Gift for {} - {} per person",
        recipient_name, per_person_text
    );

    tracing::debug!(gift = %gift.name, participants, per_person, "Group gift split");

    Ok(GroupGiftResponse {
        participants,
        amount_per_person: per_person,
        whatsapp_link: whatsapp_link(&message),
        email_link: email_link(&subject, &message),
        message,
    })
}
