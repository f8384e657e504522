//! End-to-end order lifecycle through the public `ui` API: a customer submits,
//! the dashboard reads it back, an admin moves it along, and the CSV reflects it.

use std::cell::RefCell;
use std::collections::BTreeMap;

use api::{ApiError, EmailCredentials};
use futures::executor::block_on;
use ui::core::config::AppConfig;
use ui::core::error::ActionError;
use ui::core::estimate::Material;
use ui::core::export::orders_csv;
use ui::core::order::{OrderStatus, OrderSummary};
use ui::core::session::{Session, User};
use ui::core::storage::{MemoryStorage, OrderStore};
use ui::core::submission::{AttachedFile, LinkOpener, OrderDraft, OrderNotifier, OrderWorkflow};
use ui::i18n::Language;

#[derive(Default)]
struct Outbox {
    sent: RefCell<Vec<(String, BTreeMap<String, String>)>>,
}

impl OrderNotifier for Outbox {
    async fn notify(
        &self,
        credentials: &EmailCredentials,
        params: &BTreeMap<String, String>,
    ) -> Result<(), ApiError> {
        self.sent
            .borrow_mut()
            .push((credentials.template_id.clone(), params.clone()));
        Ok(())
    }
}

#[derive(Default)]
struct Browser {
    tabs: RefCell<Vec<String>>,
}

impl LinkOpener for Browser {
    fn open(&self, url: &str) {
        self.tabs.borrow_mut().push(url.to_string());
    }
}

fn env_config() -> AppConfig {
    AppConfig::from_lookup(|name| match name {
        "HAWEYA_EMAILJS_SERVICE_ID" => Some("service_haweya".into()),
        "HAWEYA_EMAILJS_TEMPLATE_ID" => Some("template_contact".into()),
        "HAWEYA_EMAILJS_ORDER_TEMPLATE_ID" => Some("template_order".into()),
        "HAWEYA_EMAILJS_PUBLIC_KEY" => Some("public".into()),
        _ => None,
    })
}

#[test]
fn customer_order_flows_to_dashboard_and_admin() {
    let config = env_config();
    let outbox = Outbox::default();
    let browser = Browser::default();
    let store = OrderStore::new(MemoryStorage::new());
    let customer = Session::signed_in(User::demo_customer());

    let workflow = OrderWorkflow {
        config: &config,
        notifier: &outbox,
        opener: &browser,
        store: &store,
    };

    let draft = OrderDraft {
        service_id: Some("4".into()),
        quantity: 200,
        size: "A4".into(),
        material: Material::Luxury,
        notes: "Gold foil on the front".into(),
        file: Some(AttachedFile {
            name: "menu.pdf".into(),
            size: Some("1.20 MB".into()),
        }),
    };

    let receipt = block_on(workflow.submit(&draft, &customer, Language::English))
        .expect("order goes through");

    // Notification used the order template and carried the priced estimate.
    let sent = outbox.sent.borrow();
    assert_eq!(sent.len(), 1);
    assert_eq!(sent[0].0, "template_order");
    assert_eq!(sent[0].1["customer_name"], "John Doe");
    assert_eq!(sent[0].1["file_name"], "menu.pdf");
    assert_eq!(sent[0].1["estimated_price"], format!("{:.2}", receipt.price));

    // WhatsApp hand-off opened exactly once.
    assert_eq!(browser.tabs.borrow().as_slice(), [receipt.whatsapp_link.clone()]);

    // The customer's dashboard sees the order as pending.
    let mine = store.orders_for("u1").expect("orders load");
    assert_eq!(mine.len(), 1);
    let order = &mine[0];
    assert_eq!(order.status, OrderStatus::Pending);
    assert_eq!(order.file_size.as_deref(), Some("1.20 MB"));
    assert_eq!(OrderSummary::of(&mine).ready, 0);

    // Admin search finds it by file name and moves it to ready.
    let all = store.load_all().expect("orders load");
    assert!(all.iter().any(|o| o.matches("MENU")));
    store
        .update_status(&order.id, OrderStatus::Ready)
        .expect("status update");

    let mine = store.orders_for("u1").expect("orders load");
    let summary = OrderSummary::of(&mine);
    assert_eq!(summary.count, 1);
    assert_eq!(summary.ready, 1);

    // Export carries the new status.
    let csv = orders_csv(&mine, Language::English);
    let row = csv.lines().nth(1).expect("one data row");
    assert!(row.contains(&order.id));
    assert!(row.contains(",Ready,"));
}

#[test]
fn guest_with_unconfigured_email_gets_nothing_sent_or_stored() {
    let config = AppConfig::from_lookup(|_| None);
    let outbox = Outbox::default();
    let browser = Browser::default();
    let store = OrderStore::new(MemoryStorage::new());

    let workflow = OrderWorkflow {
        config: &config,
        notifier: &outbox,
        opener: &browser,
        store: &store,
    };
    let draft = OrderDraft {
        service_id: Some("1".into()),
        ..OrderDraft::default()
    };

    let err = block_on(workflow.submit(&draft, &Session::guest(), Language::Arabic))
        .expect_err("no credentials");

    assert!(matches!(err, ActionError::ConfigurationMissing(_)));
    assert!(outbox.sent.borrow().is_empty());
    assert!(browser.tabs.borrow().is_empty());
    assert!(store.load_all().expect("empty store loads").is_empty());
}
