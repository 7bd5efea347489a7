mod common;

use common::scene_core::constants::*;
use common::scene_core::profile::*;
use glam::Vec3;

#[test]
fn mobile_user_agents_select_mobile() {
    let agents = [
        "Mozilla/5.0 (iPhone; CPU iPhone OS 17_0 like Mac OS X) AppleWebKit/605.1.15",
        "Mozilla/5.0 (iPad; CPU OS 16_6 like Mac OS X)",
        "Mozilla/5.0 (iPod touch; CPU iPhone OS 12_0 like Mac OS X)",
        "Mozilla/5.0 (Linux; Android 14; Pixel 8) AppleWebKit/537.36",
        "SOMETHING ANDROID IN CAPS",
        "lowercase iphone",
    ];
    for ua in agents {
        assert_eq!(DeviceClass::from_user_agent(ua), DeviceClass::Mobile, "{ua}");
    }
}

#[test]
fn other_user_agents_select_desktop() {
    let agents = [
        "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 Chrome/126.0",
        "Mozilla/5.0 (Macintosh; Intel Mac OS X 14_5) Safari/605.1.15",
        "Mozilla/5.0 (X11; Linux x86_64; rv:127.0) Gecko/20100101 Firefox/127.0",
        "",
    ];
    for ua in agents {
        assert_eq!(DeviceClass::from_user_agent(ua), DeviceClass::Desktop, "{ua}");
    }
}

#[test]
fn profiles_carry_device_settings() {
    let desktop = ViewportProfile::for_device(DeviceClass::Desktop);
    assert_eq!(desktop.camera_position, Vec3::new(0.0, 0.0, 100.0));
    assert_eq!(desktop.fov_degrees, DESKTOP_FOV_DEG);
    assert_eq!(desktop.radius_factor, 1.0);
    assert_eq!(desktop.card_scale, Vec3::ONE);

    let mobile = ViewportProfile::from_user_agent("Android");
    assert_eq!(mobile.device, DeviceClass::Mobile);
    assert_eq!(mobile.camera_position, Vec3::new(0.0, 0.0, 50.0));
    assert_eq!(mobile.fov_degrees, MOBILE_FOV_DEG);
    assert_eq!(mobile.radius_factor, MOBILE_RADIUS_FACTOR);
    assert_eq!(mobile.card_scale, Vec3::splat(0.8));
}

#[test]
fn selection_is_deterministic() {
    let ua = "Mozilla/5.0 (iPad; CPU OS 16_6 like Mac OS X)";
    assert_eq!(
        ViewportProfile::from_user_agent(ua),
        ViewportProfile::from_user_agent(ua)
    );
}
