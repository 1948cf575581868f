//! Embed snippet for the companion chat widget.
//!
//! The widget is a hosted assistant; calorie-doctor only prints the
//! snippet so it can be pasted into a web page.

const LOADER_BASE_URL: &str = "https://web-chat.global.assistant.watson.appdomain.cloud/versions/";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WidgetEmbed {
    pub integration_id: String,
    pub region: String,
    pub service_instance_id: String,
}

impl WidgetEmbed {
    pub fn new(
        integration_id: impl Into<String>,
        region: impl Into<String>,
        service_instance_id: impl Into<String>,
    ) -> Self {
        Self {
            integration_id: integration_id.into(),
            region: region.into(),
            service_instance_id: service_instance_id.into(),
        }
    }

    /// HTML `<script>` block that loads and renders the widget.
    pub fn script(&self) -> String {
        format!(
            r#"<script>
  window.watsonAssistantChatOptions = {{
    integrationID: "{integration_id}",
    region: "{region}",
    serviceInstanceID: "{service_instance_id}",
    onLoad: async (instance) => {{ await instance.render(); }}
  }};
  setTimeout(function(){{
    const t=document.createElement('script');
    t.src="{LOADER_BASE_URL}" + (window.watsonAssistantChatOptions.clientVersion || 'latest') + "/WatsonAssistantChatEntry.js";
    document.head.appendChild(t);
  }});
</script>"#,
            integration_id = js_string(&self.integration_id),
            region = js_string(&self.region),
            service_instance_id = js_string(&self.service_instance_id),
        )
    }
}

/// Keep configured ids from breaking out of the JS string literal.
fn js_string(value: &str) -> String {
    value
        .chars()
        .filter(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.'))
        .collect()
}
