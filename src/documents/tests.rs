#[cfg(test)]
mod tests {
    use crate::documents::models::*;
    use crate::documents::validation::{validate_phone, Validate, ValidationErrors};
    use crate::documents::{ChallanAction, InvoiceAction, LetterAction};

    fn sample_invoice() -> Invoice {
        Invoice {
            invoice_no: "INV001".to_string(),
            date: "2024-01-01".to_string(),
            customer_name: "Test Customer".to_string(),
            items: vec![LineItem {
                description: "DG Set Rental".to_string(),
                hsn_code: "8502".to_string(),
                qty: 10.0,
                rate: 100.0,
                tax_rate_percent: 18.0,
                amount: 1000.0,
            }],
            ..Default::default()
        }
    }

    #[test]
    fn test_line_item_amount_recompute() {
        let mut item = LineItem {
            qty: 3.0,
            rate: 250.0,
            ..Default::default()
        };
        item.recompute();
        assert_eq!(item.amount, 750.0);

        // Idempotent under repeated identical edits.
        item.recompute();
        assert_eq!(item.amount, 750.0);
    }

    #[test]
    fn test_coercion_never_propagates_nan() {
        assert_eq!(coerce_qty(f64::NAN), 0.0);
        assert_eq!(coerce_qty(f64::INFINITY), 0.0);
        assert_eq!(coerce_qty(-5.0), 0.0);
        assert_eq!(coerce_qty(2.5), 2.5);

        let mut item = LineItem {
            qty: f64::NAN,
            rate: 100.0,
            ..Default::default()
        };
        item.recompute();
        assert_eq!(item.amount, 0.0);
    }

    #[test]
    fn test_invoice_reducer_recomputes_amount() {
        let invoice = sample_invoice()
            .reduce(InvoiceAction::SetItemQty { index: 0, qty: 4.0 })
            .reduce(InvoiceAction::SetItemRate {
                index: 0,
                rate: 50.0,
            });
        assert_eq!(invoice.items[0].amount, 200.0);

        // The same edit applied again changes nothing.
        let again = invoice.clone().reduce(InvoiceAction::SetItemQty { index: 0, qty: 4.0 });
        assert_eq!(again, invoice);
    }

    #[test]
    fn test_invoice_reducer_header_fields() {
        let invoice = Invoice::default()
            .reduce(InvoiceAction::SetInvoiceNo {
                invoice_no: "INV042".to_string(),
            })
            .reduce(InvoiceAction::SetCustomerName {
                customer_name: "ACME".to_string(),
            })
            .reduce(InvoiceAction::SetTaxMode {
                tax_mode: TaxMode::CgstSgst,
            });
        assert_eq!(invoice.invoice_no, "INV042");
        assert_eq!(invoice.customer_name, "ACME");
        assert_eq!(invoice.tax_mode, TaxMode::CgstSgst);
    }

    #[test]
    fn test_challan_reducer_transport_fields() {
        let challan = Challan::default()
            .reduce(ChallanAction::SetVehicleNo {
                vehicle_no: "TN 18 AB 1234".to_string(),
            })
            .reduce(ChallanAction::SetDriverName {
                driver_name: "Mani".to_string(),
            });
        assert!(!challan.transport_details.is_empty());
        assert_eq!(challan.transport_details.vehicle_no, "TN 18 AB 1234");
    }

    #[test]
    fn test_invoice_reducer_out_of_range_is_noop() {
        let invoice = sample_invoice();
        let reduced = invoice.clone().reduce(InvoiceAction::SetItemQty {
            index: 7,
            qty: 99.0,
        });
        assert_eq!(reduced, invoice);
    }

    #[test]
    fn test_invoice_reducer_add_remove() {
        let invoice = sample_invoice().reduce(InvoiceAction::AddItem);
        assert_eq!(invoice.items.len(), 2);
        let invoice = invoice.reduce(InvoiceAction::RemoveItem { index: 1 });
        assert_eq!(invoice.items.len(), 1);
    }

    #[test]
    fn test_invoice_subtotal_and_uniform_rate() {
        let mut invoice = sample_invoice();
        invoice.items.push(LineItem {
            qty: 2.0,
            rate: 500.0,
            tax_rate_percent: 18.0,
            ..Default::default()
        });
        assert_eq!(invoice.subtotal(), 2000.0);
        assert_eq!(invoice.uniform_tax_rate(), Some(18.0));

        invoice.items[1].tax_rate_percent = 5.0;
        assert_eq!(invoice.uniform_tax_rate(), None);
    }

    #[test]
    fn test_challan_reducer_and_total_quantity() {
        let challan = Challan {
            challan_no: "DC001".to_string(),
            recipient_name: "Receiver".to_string(),
            items: vec![ChallanItem {
                description: "Cable drum".to_string(),
                quantity: 3.0,
                unit: "Nos".to_string(),
                ..Default::default()
            }],
            ..Default::default()
        }
        .reduce(ChallanAction::AddItem)
        .reduce(ChallanAction::SetItemQuantity {
            index: 1,
            quantity: 7.0,
        });

        assert_eq!(challan.items.len(), 2);
        assert_eq!(challan.total_quantity(), 10.0);
    }

    #[test]
    fn test_letter_salutation_and_closing() {
        let formal = Letter {
            recipient_name: "Mr. Kumar".to_string(),
            template: LetterTemplate::Formal,
            ..Default::default()
        };
        assert_eq!(formal.salutation(), "Dear Sir/Madam,");
        assert_eq!(formal.closing(), "Yours faithfully,");

        let semi = Letter {
            recipient_name: "Mr. Kumar".to_string(),
            template: LetterTemplate::Semiformal,
            ..Default::default()
        };
        assert_eq!(semi.salutation(), "Dear Mr. Kumar,");
        assert_eq!(semi.closing(), "Yours sincerely,");

        let semi_unnamed = Letter {
            template: LetterTemplate::Semiformal,
            ..Default::default()
        };
        assert_eq!(semi_unnamed.salutation(), "Dear Sir/Madam,");
    }

    #[test]
    fn test_letter_reducer() {
        let letter = Letter::default()
            .reduce(LetterAction::SetSubject {
                subject: "Rate revision".to_string(),
            })
            .reduce(LetterAction::SetBody {
                body: "Please find enclosed.".to_string(),
            });
        assert_eq!(letter.subject, "Rate revision");
        assert_eq!(letter.body, "Please find enclosed.");
    }

    #[test]
    fn test_invoice_validation() {
        assert!(sample_invoice().validate().is_ok());

        let mut bad = sample_invoice();
        bad.items.clear();
        bad.customer_name.clear();
        let message = bad.validate().unwrap_err();
        assert!(message.contains("customerName"));
        assert!(message.contains("at least one line item"));
    }

    #[test]
    fn test_invoice_validation_rejects_bad_gstin() {
        let mut invoice = sample_invoice();
        invoice.party_gstin = "NOT-A-GSTIN".to_string();
        assert!(invoice.validate().is_err());

        invoice.party_gstin = "33AKNPR3914K1ZT".to_string();
        assert!(invoice.validate().is_ok());
    }

    #[test]
    fn test_phone_validation() {
        let mut ok = ValidationErrors::new();
        validate_phone("9790987190", "phone", &mut ok);
        validate_phone("", "phone", &mut ok);
        assert!(ok.is_empty());

        let mut bad = ValidationErrors::new();
        validate_phone("12345", "phone", &mut bad);
        validate_phone("5790987190", "phone", &mut bad);
        assert_eq!(bad.len(), 2);
    }

    #[test]
    fn test_letter_validation_requires_body() {
        let letter = Letter {
            recipient_name: "The Manager".to_string(),
            subject: "Hello".to_string(),
            body: "   ".to_string(),
            ..Default::default()
        };
        assert!(letter.validate().is_err());
    }

    #[test]
    fn test_storage_keys() {
        assert_eq!(DocumentKind::Invoice.storage_key(), "invoices");
        assert_eq!(DocumentKind::Challan.storage_key(), "challans");
        assert_eq!(DocumentKind::LetterPad.storage_key(), "letter_pads");
    }

    #[test]
    fn test_invoice_serde_round_trip() {
        let invoice = sample_invoice();
        let json = serde_json::to_string(&invoice).unwrap();
        assert!(json.contains("invoiceNo"));
        let back: Invoice = serde_json::from_str(&json).unwrap();
        assert_eq!(back, invoice);
    }

    #[test]
    fn test_invoice_deserializes_with_missing_fields() {
        let json = r#"{"invoiceNo":"INV002","items":[{"description":"Part","qty":1.0}]}"#;
        let invoice: Invoice = serde_json::from_str(json).unwrap();
        assert_eq!(invoice.invoice_no, "INV002");
        assert_eq!(invoice.tax_mode, TaxMode::Igst);
        assert_eq!(invoice.items[0].tax_rate_percent, 18.0);
    }
}
