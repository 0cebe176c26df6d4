//! Integration tests for the Merit provider behind `AccountingClient`
//!
//! **Coverage:**
//! - Signing: every request carries `ApiId`, a 14-digit timestamp and a
//!   signature that verifies against the received body
//! - Wire shapes: tax aggregation, partial updates, change-date filters
//! - Error classification with operation names
//! - Empty bodies, PDF decoding, financial report error messages
//! - Batch creation over real HTTP, including cancellation
//!
//! **Infrastructure:** WireMock stands in for the Merit API.

#[path = "support.rs"]
mod support;

use std::time::Duration;

use chrono::NaiveDate;
use ledgerbridge_domain::{
    CreateCreditNoteInput, CreateCustomerInput, CreateInvoiceInput, CreateInvoiceLineInput,
    CreateItemInput, ErrorKind, FinancialReportQuery, InvoiceStatus, ItemType, PaymentDirection,
    Period, ReportRowKind, UpdateCustomerInput,
};
use rust_decimal_macros::dec;
use serde_json::json;
use support::{
    merit_server, query_value, received_body, respond_json, respond_status, signature_verifies,
    API_ID,
};
use tokio_util::sync::CancellationToken;
use wiremock::matchers::{body_partial_json, method, path};
use wiremock::{Mock, ResponseTemplate};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("valid date")
}

fn invoice_input(number: &str) -> CreateInvoiceInput {
    CreateInvoiceInput {
        customer_name: "Acme OÜ".into(),
        customer_email: Some("billing@acme.ee".into()),
        doc_date: Some(date(2024, 6, 1)),
        due_date: Some(date(2024, 6, 15)),
        invoice_no: number.into(),
        currency: Some("EUR".into()),
        lines: vec![
            CreateInvoiceLineInput {
                code: "CONS".into(),
                description: "Consulting".into(),
                quantity: dec!(2),
                unit_price: dec!(10),
                tax_id: "vat-22".into(),
                ..CreateInvoiceLineInput::default()
            },
            CreateInvoiceLineInput {
                code: "CONS".into(),
                description: "More consulting".into(),
                quantity: dec!(3),
                unit_price: dec!(10),
                tax_id: "vat-22".into(),
                ..CreateInvoiceLineInput::default()
            },
        ],
        ..CreateInvoiceInput::default()
    }
}

// ============================================================================
// Signing & request shape
// ============================================================================

#[tokio::test]
async fn create_invoice_is_signed_and_aggregates_taxes() {
    let (server, client) = merit_server().await;
    respond_json(
        &server,
        "v2/sendinvoice",
        json!({
            "CustomerId": "cust-9",
            "InvoiceId": "inv-1",
            "InvoiceNo": "INV-001",
            "RefNo": "12344",
            "NewCustomer": true,
        }),
    )
    .await;

    let invoice = client.invoices.create(&invoice_input("INV-001")).await.expect("created");

    assert_eq!(invoice.id, "inv-1");
    assert_eq!(invoice.number, "INV-001");
    assert_eq!(invoice.customer_id, "cust-9");
    assert_eq!(invoice.customer_name, "Acme OÜ");
    assert_eq!(invoice.reference_no, "12344");
    assert_eq!(invoice.currency, "EUR");
    assert_eq!(invoice.doc_date, Some(date(2024, 6, 1)));
    assert_eq!(invoice.status, InvoiceStatus::Unpaid);

    let requests = server.received_requests().await.expect("recording");
    let request = &requests[0];
    let timestamp = query_value(request, "timestamp").expect("timestamp");
    assert_eq!(query_value(request, "ApiId").as_deref(), Some(API_ID));
    assert_eq!(timestamp.len(), 14);
    assert!(timestamp.bytes().all(|b| b.is_ascii_digit()));
    assert!(signature_verifies(request));
    assert_eq!(
        request.headers.get("content-type").and_then(|v| v.to_str().ok()),
        Some("application/json")
    );

    let body = received_body(&server, "v2/sendinvoice").await;
    assert_eq!(body["AccountingDoc"], json!(1));
    assert_eq!(body["DocDate"], json!("20240601"));
    assert_eq!(body["Customer"], json!({"Name": "Acme OÜ", "Email": "billing@acme.ee"}));
    assert_eq!(body["InvoiceRow"].as_array().map(Vec::len), Some(2));
    assert_eq!(body["TaxAmount"], json!([{"TaxId": "vat-22", "Amount": "50"}]));
}

#[tokio::test]
async fn credit_note_uses_credit_document_code() {
    let (server, client) = merit_server().await;
    respond_json(&server, "v2/sendinvoice", json!({"InvoiceId": "cn-1", "InvoiceNo": "CN-1"}))
        .await;

    let input = CreateCreditNoteInput { document: invoice_input("CN-1") };
    let note = client.invoices.create_credit_note(&input).await.expect("credit note");

    assert_eq!(note.id, "cn-1");
    assert_eq!(received_body(&server, "v2/sendinvoice").await["AccountingDoc"], json!(5));
}

#[tokio::test]
async fn partial_customer_update_sends_only_set_fields() {
    let (server, client) = merit_server().await;
    respond_status(&server, "v1/updatecustomer", 200, "").await;

    let update = UpdateCustomerInput {
        email: Some("new@acme.ee".into()),
        ..UpdateCustomerInput::new("cust-9")
    };
    client.customers.update(&update).await.expect("updated");

    assert_eq!(
        received_body(&server, "v1/updatecustomer").await,
        json!({"Id": "cust-9", "Email": "new@acme.ee"})
    );
}

#[tokio::test]
async fn changed_since_queries_use_change_date() {
    let (server, client) = merit_server().await;
    respond_json(
        &server,
        "v2/getinvoices",
        json!([{
            "SIHId": "inv-1",
            "InvoiceNo": "INV-001",
            "DocumentDate": "2024-06-01T00:00:00",
            "TotalAmount": 61,
            "PaidAmount": 61,
            "Paid": true,
        }]),
    )
    .await;

    let invoices =
        client.sync.pull_invoice_statuses(date(2024, 6, 1), date(2024, 6, 30)).await.expect("pull");

    assert_eq!(invoices.len(), 1);
    assert_eq!(invoices[0].status, InvoiceStatus::Paid);
    assert_eq!(invoices[0].doc_date, Some(date(2024, 6, 1)));
    assert_eq!(
        received_body(&server, "v2/getinvoices").await,
        json!({"PeriodStart": "20240601", "PeriodEnd": "20240630", "DateType": 1})
    );
}

// ============================================================================
// Error classification
// ============================================================================

#[tokio::test]
async fn status_codes_become_sentinels_with_operation() {
    let cases = [
        (401, ErrorKind::AuthFailed),
        (403, ErrorKind::AuthFailed),
        (404, ErrorKind::NotFound),
        (429, ErrorKind::RateLimit),
        (500, ErrorKind::Api),
    ];

    for (status, kind) in cases {
        let (server, client) = merit_server().await;
        respond_status(&server, "v2/getinvoice", status, "nope").await;

        let err = client.invoices.get("inv-1").await.unwrap_err();

        assert_eq!(err.kind(), kind, "status {status}");
        assert_eq!(err.operation(), Some("get_invoice"));
        assert_eq!(err.provider(), Some("merit"));
    }
}

#[tokio::test]
async fn unclassified_status_keeps_code_and_body() {
    let (server, client) = merit_server().await;
    respond_status(&server, "v1/gettaxes", 502, "gateway down").await;

    let err = client.test_connection().await.unwrap_err();

    assert_eq!(err.status(), Some(502));
    assert_eq!(err.operation(), Some("test_connection"));
    assert!(err.to_string().contains("gateway down"));
}

#[tokio::test]
async fn malformed_json_is_decode_error() {
    let (server, client) = merit_server().await;
    Mock::given(method("POST"))
        .and(path("/api/v1/gettaxes"))
        .respond_with(ResponseTemplate::new(200).set_body_string("[{"))
        .mount(&server)
        .await;

    let err = client.taxes.list().await.unwrap_err();

    assert_eq!(err.kind(), ErrorKind::Decode);
    assert_eq!(err.operation(), Some("list_taxes"));
}

// ============================================================================
// Response handling
// ============================================================================

#[tokio::test]
async fn empty_bodies_are_not_errors() {
    let (server, client) = merit_server().await;
    respond_status(&server, "v1/deleteinvoice", 200, "").await;
    respond_status(&server, "v2/getpayments", 200, "").await;

    client.invoices.delete("inv-1").await.expect("deleted");
    let payments = client
        .payments
        .list(&Period::new(date(2024, 1, 1), date(2024, 1, 31)))
        .await
        .expect("payments");

    assert!(payments.is_empty());
    assert_eq!(received_body(&server, "v1/deleteinvoice").await, json!({"Id": "inv-1"}));
}

#[tokio::test]
async fn pdf_content_is_base64_decoded() {
    let (server, client) = merit_server().await;
    respond_json(
        &server,
        "v2/getsalesinvpdf",
        json!({"FileName": "INV-001.pdf", "FileContent": "JVBERi0xLjQ="}),
    )
    .await;

    let pdf = client.invoices.get_pdf("inv-1", true).await.expect("pdf");

    assert_eq!(pdf.file_name, "INV-001.pdf");
    assert_eq!(pdf.content, b"%PDF-1.4");
    assert_eq!(
        received_body(&server, "v2/getsalesinvpdf").await,
        json!({"Id": "inv-1", "DelivNote": true})
    );
}

#[tokio::test]
async fn invalid_pdf_content_is_decode_error() {
    let (server, client) = merit_server().await;
    respond_json(
        &server,
        "v2/getsalesinvpdf",
        json!({"FileName": "x.pdf", "FileContent": "not base64!!"}),
    )
    .await;

    let err = client.invoices.get_pdf("inv-1", false).await.unwrap_err();

    assert_eq!(err.kind(), ErrorKind::Decode);
    assert_eq!(err.operation(), Some("get_invoice_pdf"));
}

#[tokio::test]
async fn invoice_detail_maps_lines_and_payments() {
    let (server, client) = merit_server().await;
    respond_json(
        &server,
        "v2/getinvoice",
        json!({
            "SIHId": "inv-1",
            "InvoiceNo": "INV-001",
            "DocumentDate": "20240601",
            "DueDate": "20240615",
            "TotalAmount": 61,
            "PaidAmount": 20,
            "Paid": false,
            "Lines": [{
                "SILId": "l-1",
                "Description": "Consulting",
                "Quantity": 5,
                "Price": 10,
                "TaxId": "vat-22",
                "TaxPct": 22,
                "AmountExclVat": 50,
                "AmountInclVat": 61,
                "VatAmount": 11,
            }],
            "Payments": [{"PaymDate": "2024-06-05", "Amount": 20, "PaymentId": "p-1"}],
        }),
    )
    .await;

    let invoice = client.invoices.get("inv-1").await.expect("invoice");

    assert_eq!(invoice.status, InvoiceStatus::Partial);
    assert_eq!(invoice.due_date, Some(date(2024, 6, 15)));
    assert_eq!(invoice.lines[0].id, "l-1");
    assert_eq!(invoice.lines[0].vat_amount, dec!(11));
    assert_eq!(invoice.payments[0].date, Some(date(2024, 6, 5)));
    assert_eq!(invoice.payments[0].payment_id, "p-1");
}

#[tokio::test]
async fn payments_carry_direction_and_links() {
    let (server, client) = merit_server().await;
    respond_json(
        &server,
        "v2/getpayments",
        json!([{
            "PIHId": "pay-1",
            "DocumentNo": "BANK-7",
            "DocumentDate": "20240110",
            "Direction": 2,
            "Amount": 120,
            "CounterPartName": "Supplier AS",
            "PaymAPIDetails": [{"DocId": "bill-1", "DocNo": "B-1", "PaidAmount": 120}],
        }]),
    )
    .await;

    let payments = client
        .payments
        .list(&Period::new(date(2024, 1, 1), date(2024, 1, 31)))
        .await
        .expect("payments");

    let payment = &payments[0];
    assert_eq!(payment.direction, PaymentDirection::Vendor);
    assert_eq!(payment.invoice_links[0].invoice_id, "bill-1");
    assert_eq!(payment.invoice_links[0].invoice_no, "B-1");
    assert_eq!(payment.linked_total(), dec!(120));
}

#[tokio::test]
async fn unknown_direction_and_null_fields_fall_back() {
    let (server, client) = merit_server().await;
    respond_json(
        &server,
        "v2/getpayments",
        json!([{
            "PIHId": "pay-2",
            "Direction": -1,
            "CounterPartName": null,
            "Amount": 15,
            "PaymAPIDetails": null,
        }]),
    )
    .await;

    let payments = client
        .payments
        .list(&Period::new(date(2024, 1, 1), date(2024, 1, 31)))
        .await
        .expect("payments decode");

    assert_eq!(payments.len(), 1);
    assert_eq!(payments[0].id, "pay-2");
    assert_eq!(payments[0].direction, PaymentDirection::Customer);
    assert_eq!(payments[0].counterpart_name, "");
    assert!(payments[0].invoice_links.is_empty());
}

#[tokio::test]
async fn report_error_message_surfaces_as_api_error() {
    let (server, client) = merit_server().await;
    respond_json(&server, "v1/getprofitrep", json!({"ErrorMsg": "period closed", "Data": null}))
        .await;

    let err = client
        .reports
        .profit_and_loss(&FinancialReportQuery::new(date(2024, 3, 31), 3))
        .await
        .unwrap_err();

    assert_eq!(err.kind(), ErrorKind::Api);
    assert_eq!(err.status(), Some(200));
    assert_eq!(err.operation(), Some("profit_and_loss"));
}

#[tokio::test]
async fn balance_sheet_rows_are_mapped() {
    let (server, client) = merit_server().await;
    respond_json(
        &server,
        "v1/getbalancerep",
        json!({
            "ErrorMsg": "",
            "Data": [
                {"RDid": 1, "Description": "ASSETS", "RowType": 1},
                {"RDid": 2, "Description": "Cash", "RowType": 2, "Balance": [1500]},
            ],
        }),
    )
    .await;

    let report = client
        .reports
        .balance_sheet(&FinancialReportQuery::new(date(2024, 3, 31), 1))
        .await
        .expect("report");

    assert_eq!(report.rows.len(), 2);
    assert_eq!(report.rows[0].kind, ReportRowKind::Heading);
    assert_eq!(report.figure_rows().count(), 1);
    assert_eq!(
        received_body(&server, "v1/getbalancerep").await,
        json!({"EndDate": "20240331", "PerCount": 1})
    );
}

#[tokio::test]
async fn create_item_uses_first_result() {
    let (server, client) = merit_server().await;
    respond_json(&server, "v2/senditems", json!([{"ItemId": "it-1", "Code": "CONS"}])).await;

    let input = CreateItemInput {
        code: "CONS".into(),
        description: "Consulting".into(),
        item_type: ItemType::Service,
        sales_price: dec!(80),
        tax_id: Some("vat-22".into()),
        ..CreateItemInput::default()
    };
    let item = client.items.create(&input).await.expect("item");

    assert_eq!(item.id, "it-1");
    assert_eq!(item.item_type, ItemType::Service);
    assert_eq!(item.sales_price, dec!(80));
    let body = received_body(&server, "v2/senditems").await;
    assert_eq!(body["Items"][0]["Type"], json!(2));
    assert_eq!(body["Items"][0]["Usage"], json!(3));
}

#[tokio::test]
async fn create_item_without_result_fails() {
    let (server, client) = merit_server().await;
    respond_json(&server, "v2/senditems", json!([])).await;

    let input = CreateItemInput { code: "X".into(), ..CreateItemInput::default() };
    let err = client.items.create(&input).await.unwrap_err();

    assert_eq!(err.operation(), Some("create_item"));
}

// ============================================================================
// Customer lookup
// ============================================================================

#[tokio::test]
async fn customer_lookup_ignores_case_and_padding() {
    let (server, client) = merit_server().await;
    respond_json(
        &server,
        "v1/getcustomers",
        json!([
            {"CustomerId": "c-1", "Name": "Bob", "Email": "bob@example.com"},
            {"CustomerId": "c-2", "Name": "Alice", "Email": "alice@example.com"},
        ]),
    )
    .await;

    let customer =
        client.customers.find_by_email("  Alice@Example.COM ").await.expect("customer found");

    assert_eq!(customer.id, "c-2");
}

#[tokio::test]
async fn find_or_create_creates_missing_customer() {
    let (server, client) = merit_server().await;
    respond_json(&server, "v1/getcustomers", json!([])).await;
    respond_json(&server, "v2/sendcustomer", json!({"Id": "c-new", "Name": "Carol"})).await;

    let input = CreateCustomerInput {
        name: "Carol".into(),
        email: Some("carol@example.com".into()),
        ..CreateCustomerInput::default()
    };
    let customer = client
        .customers
        .find_or_create("carol@example.com", &input)
        .await
        .expect("customer");

    assert_eq!(customer.id, "c-new");
    assert_eq!(customer.email, "carol@example.com");
    assert_eq!(
        received_body(&server, "v2/sendcustomer").await,
        json!({"Name": "Carol", "NotTDCustomer": false, "Email": "carol@example.com"})
    );
}

#[tokio::test]
async fn lookup_failure_is_not_masked_by_create() {
    let (server, client) = merit_server().await;
    respond_status(&server, "v1/getcustomers", 401, "bad signature").await;

    let input = CreateCustomerInput {
        name: "Carol".into(),
        email: Some("carol@example.com".into()),
        ..CreateCustomerInput::default()
    };
    let err = client
        .customers
        .find_or_create("carol@example.com", &input)
        .await
        .unwrap_err();

    assert!(err.is_auth_failed());
    let requests = server.received_requests().await.expect("recording");
    assert!(requests.iter().all(|request| request.url.path() != "/api/v2/sendcustomer"));
}

#[tokio::test]
async fn blank_email_is_rejected_before_any_request() {
    let (server, client) = merit_server().await;
    respond_json(
        &server,
        "v1/getcustomers",
        json!([{"CustomerId": "c-1", "Name": "No Email", "Email": ""}]),
    )
    .await;

    let err = client.customers.find_by_email("   ").await.unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidInput);
    assert_eq!(err.operation(), Some("find_customer_by_email"));

    let input = CreateCustomerInput { name: "Nobody".into(), ..CreateCustomerInput::default() };
    let err = client.customers.find_or_create("", &input).await.unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidInput);

    let requests = server.received_requests().await.expect("recording");
    assert!(requests.is_empty());
}

// ============================================================================
// Batch creation over HTTP
// ============================================================================

#[tokio::test]
async fn batch_keeps_order_and_isolates_failures() {
    let (server, client) = merit_server().await;
    Mock::given(method("POST"))
        .and(path("/api/v2/sendinvoice"))
        .and(body_partial_json(json!({"InvoiceNo": "INV-3"})))
        .respond_with(ResponseTemplate::new(500).set_body_string("duplicate number"))
        .with_priority(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/api/v2/sendinvoice"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"InvoiceId": "ok"})))
        .with_priority(2)
        .mount(&server)
        .await;

    let inputs: Vec<_> = (1..=7).map(|n| invoice_input(&format!("INV-{n}"))).collect();
    let results = client.invoices.batch_create(inputs).await;

    assert_eq!(results.len(), 7);
    for (position, result) in results.iter().enumerate() {
        assert_eq!(result.index, position);
        if position == 2 {
            let err = result.error().expect("INV-3 fails");
            assert_eq!(err.status(), Some(500));
            assert_eq!(err.operation(), Some("create_invoice"));
        } else {
            assert!(result.is_ok(), "slot {position} should succeed");
        }
    }
}

#[tokio::test]
async fn cancelled_batch_returns_promptly() {
    let (server, client) = merit_server().await;
    Mock::given(method("POST"))
        .and(path("/api/v2/sendinvoice"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({"InvoiceId": "late"}))
                .set_delay(Duration::from_secs(10)),
        )
        .mount(&server)
        .await;

    let token = CancellationToken::new();
    let trigger = token.clone();
    tokio::spawn(async move {
        tokio::time::sleep(Duration::from_millis(100)).await;
        trigger.cancel();
    });

    let inputs: Vec<_> = (1..=6).map(|n| invoice_input(&format!("INV-{n}"))).collect();
    let started = std::time::Instant::now();
    let results = client.invoices.batch_create_cancellable(inputs, &token).await;

    assert!(started.elapsed() < Duration::from_secs(5));
    assert_eq!(results.len(), 6);
    assert!(results.iter().all(|result| result.error().is_some_and(|err| err.is_cancelled())));
}
