use vod_chat_console::{
    components::router::persona_path,
    controllers::{
        DownloadController, PersonaController, ResultsView, Severity, Submit, VodOptions,
    },
    objects::{DownloadResults, PersonaOutcome, VodInventory},
};

#[test]
fn bulk_download_with_partial_failure() {
    let mut controller = DownloadController::default();
    let mut refreshes = 0;

    let (ticket, request) = match controller.submit("123\n456") {
        Submit::Send {
            ticket,
            request,
            busy,
        } => {
            assert_eq!(busy, ResultsView::Busy("Downloading chat..."));
            (ticket, request)
        }
        Submit::Rejected(view) => panic!("unexpected rejection: {:?}", view),
    };
    assert_eq!(
        request.form_pairs(),
        vec![("twitch_urls", String::from("123,456"))]
    );

    let body = r#"{"123":{"success":true,"message":"ok"},"456":{"success":false,"message":"not found"}}"#;
    let results: DownloadResults = serde_json::from_str(body).unwrap();
    let settled = controller.settle(ticket, Ok(results));

    if settled.refresh_inventory {
        refreshes += 1;
    }

    let rows = match settled.view {
        Some(ResultsView::Downloads(rows)) => rows,
        other => panic!("unexpected view: {:?}", other),
    };
    let rendered: Vec<(String, Severity)> =
        rows.iter().map(|row| (row.text(), row.severity)).collect();

    assert_eq!(
        rendered,
        vec![
            (String::from("123: ok"), Severity::Success),
            (String::from("456: not found"), Severity::Danger),
        ]
    );
    assert_eq!(refreshes, 1);
}

#[test]
fn refreshed_inventory_fills_select() {
    let mut options = VodOptions::default();
    let inventory: VodInventory = serde_json::from_str(r#"["123","456","789"]"#).unwrap();

    options.replace(inventory);

    let labels: Vec<String> = options.options().into_iter().map(|opt| opt.label).collect();

    assert_eq!(labels, vec!["Select a VOD", "123", "456", "789"]);
}

#[test]
fn persona_generation_links_to_submitted_vod() {
    let mut controller = PersonaController::default();

    let ticket = match controller.submit("789", "3") {
        Submit::Send { ticket, .. } => ticket,
        Submit::Rejected(view) => panic!("unexpected rejection: {:?}", view),
    };
    let outcome: PersonaOutcome = serde_json::from_str(r#"{"success":true}"#).unwrap();

    match controller.settle(ticket, Ok(outcome)) {
        Some(view @ ResultsView::PersonasReady { .. }) => {
            assert_eq!(view.banner_text().as_deref(), Some("Personas generated!"));
            if let ResultsView::PersonasReady { vod_id } = view {
                assert_eq!(persona_path(&vod_id), "/view_personas/789");
            }
        }
        other => panic!("unexpected view: {:?}", other),
    }
}
