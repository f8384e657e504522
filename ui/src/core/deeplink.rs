//! WhatsApp hand-off for new orders.

/// Agency WhatsApp number in international format, no `+`.
pub const WHATSAPP_NUMBER: &str = "218942926128";

/// Plain chat link used by the floating contact button.
pub fn whatsapp_chat_url() -> String {
    format!("https://wa.me/{WHATSAPP_NUMBER}")
}

/// Fields of the order message, already resolved to display strings.
#[derive(Debug, Clone, PartialEq)]
pub struct OrderMessage<'a> {
    pub service_name: &'a str,
    pub quantity: i64,
    pub material: &'a str,
    /// Two-decimal amount without the currency sign.
    pub estimated_price: &'a str,
    pub notes: &'a str,
    pub file_name: &'a str,
    pub customer_name: &'a str,
    pub customer_email: &'a str,
}

impl OrderMessage<'_> {
    pub fn text(&self) -> String {
        let notes = if self.notes.trim().is_empty() {
            "None"
        } else {
            self.notes
        };
        format!(
            "*New Order from Haweya Website*\n\n\
             *Service:* {}\n\
             *Quantity:* {}\n\
             *Material:* {}\n\
             *Estimated Price:* ${}\n\
             *Notes:* {}\n\
             *File:* {}\n\n\
             *Customer:* {}\n\
             *Email:* {}",
            self.service_name,
            self.quantity,
            self.material,
            self.estimated_price,
            notes,
            self.file_name,
            self.customer_name,
            self.customer_email,
        )
    }

    pub fn link(&self) -> String {
        format!(
            "{}?text={}",
            whatsapp_chat_url(),
            urlencoding::encode(&self.text())
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn message() -> OrderMessage<'static> {
        OrderMessage {
            service_name: "Business Cards",
            quantity: 150,
            material: "Premium",
            estimated_price: "120.00",
            notes: "",
            file_name: "No file uploaded",
            customer_name: "Guest",
            customer_email: "Not provided",
        }
    }

    #[test]
    fn text_lists_every_field() {
        let text = message().text();
        assert!(text.starts_with("*New Order from Haweya Website*\n\n"));
        assert!(text.contains("*Service:* Business Cards\n"));
        assert!(text.contains("*Quantity:* 150\n"));
        assert!(text.contains("*Estimated Price:* $120.00\n"));
        assert!(text.contains("*Notes:* None\n"));
        assert!(text.ends_with("*Email:* Not provided"));
    }

    #[test]
    fn link_is_url_encoded() {
        let link = message().link();
        assert!(link.starts_with("https://wa.me/218942926128?text="));
        let query = link.split_once("?text=").unwrap().1;
        assert!(!query.contains(' '));
        assert!(!query.contains('\n'));
        assert!(query.contains("%0A"));
        let decoded = urlencoding::decode(query).unwrap();
        assert_eq!(decoded, message().text());
    }

    #[test]
    fn arabic_service_names_survive_encoding() {
        let mut msg = message();
        msg.service_name = "كروت شخصية";
        let link = msg.link();
        let decoded = urlencoding::decode(link.split_once("?text=").unwrap().1).unwrap();
        assert!(decoded.contains("كروت شخصية"));
    }
}
