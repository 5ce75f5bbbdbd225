/// Macro for model field updates with automatic rendering.
/// Supports both single and multiple field updates.
///
/// # Examples
///
/// Single field update:
/// ```ignore
/// update_field!(model.alert, None)
/// ```
///
/// Multiple field updates:
/// ```ignore
/// update_field!(
///     model.alert, None;
///     model.utc_offset_minutes, 60
/// )
/// ```
#[macro_export]
macro_rules! update_field {
    // Multiple field updates (must come first to match the pattern)
    ($($model_field:expr, $value:expr);+ $(;)?) => {{
        let mut changed = false;
        $(
            let value = $value;
            if $model_field != value {
                $model_field = value;
                changed = true;
            }
        )+
        if changed {
            crux_core::render::render()
        } else {
            crux_core::Command::done()
        }
    }};

    // Single field update
    ($model_field:expr, $value:expr) => {{
        update_field!($model_field, $value;)
    }};
}

/// Generic request/render for GET features.
///
/// Puts the feature into busy state, renders, and issues the GET. The decoded
/// outcome is delivered as the given domain response event.
///
/// # Patterns
///
/// Pattern 1: standard device response (absent payload or `success: false` fail)
/// ```ignore
/// feature_get!(Status, StatusEvent, model, Feature::Status, url, FetchResponse)
/// ```
///
/// Pattern 2: custom response processing
/// ```ignore
/// feature_get!(Rf, RfEvent, model, Feature::RfScan, url, ScanResponse,
///     process: process_report_response
/// )
/// ```
#[macro_export]
macro_rules! feature_get {
    // Pattern 1: standard device response
    ($domain:ident, $domain_event:ident, $model:expr, $feature:expr, $url:expr, $response_event:ident) => {{
        $crate::feature_get!($domain, $domain_event, $model, $feature, $url, $response_event,
            process: $crate::process_api_response
        )
    }};

    // Pattern 2: custom response processing
    ($domain:ident, $domain_event:ident, $model:expr, $feature:expr, $url:expr, $response_event:ident, process: $process:path) => {{
        let url: String = $url;
        $model.feature_mut($feature).begin();
        log::debug!("GET {url}");
        crux_core::Command::all([
            crux_core::render::render(),
            $crate::HttpCmd::get(url).build().then_send(|result| {
                $crate::events::Event::$domain($crate::events::$domain_event::$response_event(
                    $process(result),
                ))
            }),
        ])
    }};
}

/// POST with a JSON body, declared as `application/json`.
///
/// Does not touch busy state; callers decide which control is disabled.
/// Evaluates to `Result<Command, crux_http::HttpError>` so that a body that
/// cannot be serialized is handled where the request was triggered.
///
/// # Example
/// ```ignore
/// api_post!(build_url("/api/v1/ntp/set"), body_json: &request,
///     then: move |result| Event::Ntp(NtpEvent::SetResponse { domain, result })
/// )
/// ```
#[macro_export]
macro_rules! api_post {
    ($url:expr, body_json: $body:expr, then: $mapper:expr) => {{
        let url: String = $url;
        log::debug!("POST {url}");
        let mapper = $mapper;
        $crate::HttpCmd::post(url)
            .header("Content-Type", "application/json")
            .body_json($body)
            .map(|builder| {
                builder
                    .build()
                    .then_send(move |result| mapper($crate::process_api_response(result)))
            })
    }};
}
