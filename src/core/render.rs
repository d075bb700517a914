use crate::core::embed::{embed_url, IFRAME_HEIGHT, IFRAME_WIDTH};
use crate::core::postal::classify_country;
use crate::domain::model::{WidgetArgs, WidgetSettings};
use crate::domain::ports::TitleFilters;
use crate::utils::escape::{esc_attr, esc_html};

/// Display-time transform from saved settings to widget markup.
///
/// Returns an empty string unless both the title and the postal code are set.
/// The `args` wrappers come from the host's theme and are emitted verbatim;
/// the title and the iframe URL are escaped for the context they land in.
pub fn render(settings: &WidgetSettings, args: &WidgetArgs, filters: &TitleFilters) -> String {
    if !settings.is_complete() {
        tracing::debug!("Widget settings incomplete, rendering nothing");
        return String::new();
    }

    let country = classify_country(&settings.postal_code);
    let src = embed_url(&settings.postal_code, country);
    let title = filters.apply(&settings.title);

    tracing::debug!(
        "Rendering pet of the day for {} ({})",
        settings.postal_code,
        country
    );

    let mut html = String::new();
    html.push_str(&args.before_widget);

    html.push_str(&args.before_title);
    html.push_str(&esc_html(&title));
    html.push_str(&args.after_title);

    html.push_str(r#"<div class="pet_of_the_day_widget_main" style="text-align: center;">"#);
    html.push_str(&format!(
        r#"<iframe width="{}" height="{}" frameborder="0" marginwidth="0" marginheight="0" scrolling="0" allowtransparency="true" src="{}"></iframe>"#,
        IFRAME_WIDTH,
        IFRAME_HEIGHT,
        iframe_src(src.as_str())
    ));
    html.push_str("</div>");

    html.push_str(&args.after_widget);
    html
}

// 查詢值已做百分比編碼，剩下的 & 只是分隔符
fn iframe_src(url: &str) -> String {
    url.split('&')
        .map(esc_attr)
        .collect::<Vec<_>>()
        .join("&")
}
