//! Third-party tracking snippets.
//!
//! Each snippet is emitted only when its id is set in the page settings.
//! Ids are reduced to `[A-Za-z0-9_-]` before being spliced into script text.

use crate::compiler::Context;
use openbuild_document::PageSettings;

const GTM_HEAD: &str = "<script>(function(w,d,s,l,i){w[l]=w[l]||[];w[l].push({'gtm.start':new \
    Date().getTime(),event:'gtm.js'});var f=d.getElementsByTagName(s)[0],j=d.createElement(s),\
    dl=l!='dataLayer'?'&l='+l:'';j.async=true;\
    j.src='https://www.googletagmanager.com/gtm.js?id='+i+dl;f.parentNode.insertBefore(j,f);\
    })(window,document,'script','dataLayer','{ID}');</script>";

const GTM_BODY: &str = "<noscript><iframe src=\"https://www.googletagmanager.com/ns.html?id={ID}\" \
    height=\"0\" width=\"0\" style=\"display:none;visibility:hidden\"></iframe></noscript>";

const FACEBOOK_PIXEL: &str = "<script>!function(f,b,e,v,n,t,s){if(f.fbq)return;\
    n=f.fbq=function(){n.callMethod?n.callMethod.apply(n,arguments):n.queue.push(arguments)};\
    if(!f._fbq)f._fbq=n;n.push=n;n.loaded=!0;n.version='2.0';n.queue=[];t=b.createElement(e);\
    t.async=!0;t.src=v;s=b.getElementsByTagName(e)[0];s.parentNode.insertBefore(t,s)}(window,\
    document,'script','https://connect.facebook.net/en_US/fbevents.js');fbq('init','{ID}');\
    fbq('track','PageView');</script>";

const FACEBOOK_NOSCRIPT: &str = "<noscript><img height=\"1\" width=\"1\" style=\"display:none\" \
    src=\"https://www.facebook.com/tr?id={ID}&ev=PageView&noscript=1\" /></noscript>";

const TIKTOK_PIXEL: &str = "<script>!function(w,d,t){w.TiktokAnalyticsObject=t;var \
    ttq=w[t]=w[t]||[];ttq.methods=[\"page\",\"track\",\"identify\",\"instances\",\"debug\",\
    \"on\",\"off\",\"once\",\"ready\",\"alias\",\"group\",\"enableCookie\",\"disableCookie\"],\
    ttq.setAndDefer=function(t,\
    e){t[e]=function(){t.push([e].concat(Array.prototype.slice.call(arguments,0)))}};for(var \
    i=0;i<ttq.methods.length;i++)ttq.setAndDefer(ttq,ttq.methods[i]);\
    ttq.instance=function(t){for(var e=ttq._i[t]||[],n=0;n<ttq.methods.length;\
    n++)ttq.setAndDefer(e,ttq.methods[n]);return e},ttq.load=function(e,n){var \
    i=\"https://analytics.tiktok.com/i18n/pixel/events.js\";ttq._i=ttq._i||{},ttq._i[e]=[],\
    ttq._i[e]._u=i,ttq._t=ttq._t||{},ttq._t[e]=+new Date,ttq._o=ttq._o||{},ttq._o[e]=n||{};\
    var o=d.createElement(\"script\");o.type=\"text/javascript\",o.async=!0,\
    o.src=i+\"?sdkid=\"+e+\"&lib=\"+t;var a=d.getElementsByTagName(\"script\")[0];\
    a.parentNode.insertBefore(o,a)};ttq.load('{ID}');ttq.page();}(window,document,'ttq');\
    </script>";

/// Tracking id with everything outside `[A-Za-z0-9_-]` removed
pub fn sanitize_id(id: &str) -> String {
    id.chars()
        .filter(|c| c.is_ascii_alphanumeric() || *c == '_' || *c == '-')
        .collect()
}

fn fill(template: &str, id: &str) -> String {
    template.replace("{ID}", id)
}

fn configured(id: &str) -> Option<String> {
    let id = sanitize_id(id.trim());
    (!id.is_empty()).then_some(id)
}

/// Snippets that belong at the end of `<head>`
pub(crate) fn head_snippets(settings: &PageSettings, ctx: &mut Context) {
    if let Some(id) = configured(&settings.google_tag_manager_id) {
        ctx.add_line("<!-- Google Tag Manager -->");
        ctx.add_line(&fill(GTM_HEAD, &id));
    }
    if let Some(id) = configured(&settings.facebook_pixel_id) {
        ctx.add_line("<!-- Facebook Pixel -->");
        ctx.add_line(&fill(FACEBOOK_PIXEL, &id));
        ctx.add_line(&fill(FACEBOOK_NOSCRIPT, &id));
    }
    if let Some(id) = configured(&settings.tiktok_pixel_id) {
        ctx.add_line("<!-- TikTok Pixel -->");
        ctx.add_line(&fill(TIKTOK_PIXEL, &id));
    }
}

/// GTM fallback iframe, first thing in `<body>`
pub(crate) fn gtm_noscript(settings: &PageSettings, ctx: &mut Context) {
    if let Some(id) = configured(&settings.google_tag_manager_id) {
        ctx.add_line(&fill(GTM_BODY, &id));
    }
}
