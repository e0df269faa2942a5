//! End-to-end flow: edit a document through reducers, validate it,
//! persist it in a file-backed store, and export it as a PDF.

use surya_docs::documents::{ChallanAction, InvoiceAction, LetterAction};
use surya_docs::pdf::InvoiceOptions;
use surya_docs::{
    generate_challan_pdf, generate_invoice_pdf, generate_letter_pdf, Challan, CompanyInfo,
    DocumentKind, DocumentStore, FileStore, Invoice, Letter, Stored, Validate,
};

fn file_store(dir: &tempfile::TempDir) -> DocumentStore<FileStore> {
    let _ = env_logger::builder().is_test(true).try_init();
    DocumentStore::new(FileStore::open(dir.path()).unwrap())
}

fn build_invoice() -> Invoice {
    let mut invoice = Invoice::default();
    for action in [
        InvoiceAction::SetInvoiceNo {
            invoice_no: "INV007".to_string(),
        },
        InvoiceAction::SetDate {
            date: "2024-04-01".to_string(),
        },
        InvoiceAction::SetCustomerName {
            customer_name: "ABC Industries".to_string(),
        },
        InvoiceAction::SetCustomerAddress {
            customer_address: "Plot 14, Chennai".to_string(),
        },
        InvoiceAction::SetPartyGstin {
            party_gstin: "29ABCDE1234F1Z5".to_string(),
        },
        InvoiceAction::AddItem,
        InvoiceAction::SetItemDescription {
            index: 0,
            description: "DG Set hire".to_string(),
        },
        InvoiceAction::SetItemQty { index: 0, qty: 4.0 },
        InvoiceAction::SetItemRate {
            index: 0,
            rate: 250.0,
        },
    ] {
        invoice = invoice.reduce(action);
    }
    invoice
}

#[test]
fn test_invoice_edit_save_export_round_trip() {
    let invoice = build_invoice();
    assert!(invoice.validate().is_ok());
    assert_eq!(invoice.items[0].amount, 1000.0);

    let dir = tempfile::tempdir().unwrap();
    let store = file_store(&dir);
    let stored = store.add(DocumentKind::Invoice, invoice);

    // Reopen against the same directory; data must survive.
    let reopened = file_store(&dir);
    let loaded: Stored<Invoice> = reopened
        .get(DocumentKind::Invoice, &stored.id)
        .expect("saved invoice present after reopen");
    assert_eq!(loaded.doc.invoice_no, "INV007");

    let company = CompanyInfo::default();
    let doc = generate_invoice_pdf(&loaded.doc, &company, &InvoiceOptions::default()).unwrap();
    assert_eq!(doc.filename, "Invoice_INV007_SURYA_POWER.pdf");
    assert!(doc.pdf.starts_with(b"%PDF"));
}

#[test]
fn test_invalid_invoice_is_rejected_before_export() {
    // No customer, no items.
    let invoice = Invoice {
        invoice_no: "INV008".to_string(),
        date: "2024-04-01".to_string(),
        ..Default::default()
    };
    let err = invoice.validate().unwrap_err();
    assert!(err.contains("Customer name is required"), "unexpected message: {}", err);
    assert!(err.contains("at least one line item"), "unexpected message: {}", err);
}

#[test]
fn test_challan_flow() {
    let mut challan = Challan::default();
    for action in [
        ChallanAction::SetChallanNo {
            challan_no: "DC010".to_string(),
        },
        ChallanAction::SetDate {
            date: "2024-04-02".to_string(),
        },
        ChallanAction::SetRecipientName {
            recipient_name: "XYZ Constructions".to_string(),
        },
        ChallanAction::SetRecipientAddress {
            recipient_address: "OMR, Chennai".to_string(),
        },
        ChallanAction::AddItem,
        ChallanAction::SetItemDescription {
            index: 0,
            description: "Control panel".to_string(),
        },
        ChallanAction::SetItemQuantity {
            index: 0,
            quantity: 2.0,
        },
        ChallanAction::SetItemUnit {
            index: 0,
            unit: "Nos".to_string(),
        },
    ] {
        challan = challan.reduce(action);
    }
    assert!(challan.validate().is_ok());

    let dir = tempfile::tempdir().unwrap();
    let store = file_store(&dir);
    let stored = store.add(DocumentKind::Challan, challan);

    let updated = store
        .update(DocumentKind::Challan, &stored.id, |doc: &mut Challan| {
            doc.terms = "Goods to be returned within 30 days.".to_string();
        })
        .unwrap();
    assert!(updated.updated_at >= stored.updated_at);

    let doc = generate_challan_pdf(&updated.doc, &CompanyInfo::default()).unwrap();
    assert_eq!(doc.filename, "Challan_DC010_SURYA_POWER.pdf");
    assert!(doc.pdf.starts_with(b"%PDF"));

    assert!(store.remove::<Challan>(DocumentKind::Challan, &stored.id));
    assert!(store.list::<Challan>(DocumentKind::Challan).is_empty());
}

#[test]
fn test_letter_flow() {
    let mut letter = Letter::default();
    for action in [
        LetterAction::SetRefNo {
            ref_no: "REF/2024/09".to_string(),
        },
        LetterAction::SetDate {
            date: "2024-04-03".to_string(),
        },
        LetterAction::SetRecipientName {
            recipient_name: "The Manager".to_string(),
        },
        LetterAction::SetSubject {
            subject: "Service contract renewal".to_string(),
        },
        LetterAction::SetBody {
            body: "We wish to renew the annual maintenance contract.".to_string(),
        },
        LetterAction::SetSenderName {
            sender_name: "R. Surya".to_string(),
        },
    ] {
        letter = letter.reduce(action);
    }
    assert!(letter.validate().is_ok());

    let dir = tempfile::tempdir().unwrap();
    let store = file_store(&dir);
    store.add(DocumentKind::LetterPad, letter.clone());
    assert_eq!(store.list::<Letter>(DocumentKind::LetterPad).len(), 1);

    let doc = generate_letter_pdf(&letter, &CompanyInfo::default()).unwrap();
    assert_eq!(doc.filename, "Letter_REF_2024_09_SURYA_POWER.pdf");
    assert!(doc.pdf.starts_with(b"%PDF"));
}

#[test]
fn test_collections_share_one_directory() {
    let dir = tempfile::tempdir().unwrap();
    let store = file_store(&dir);
    store.add(DocumentKind::Invoice, build_invoice());
    store.add(DocumentKind::Challan, Challan::default());

    assert!(dir.path().join("invoices.json").exists());
    assert!(dir.path().join("challans.json").exists());
    assert_eq!(store.list::<Invoice>(DocumentKind::Invoice).len(), 1);
    assert_eq!(store.list::<Challan>(DocumentKind::Challan).len(), 1);
}
