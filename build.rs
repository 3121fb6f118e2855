// SPDX-License-Identifier: MPL-2.0
//! Embeds the window icon into the Windows executable so the taskbar
//! and file explorer show it. No-op on other platforms.

fn main() {
    #[cfg(target_os = "windows")]
    {
        let mut res = winresource::WindowsResource::new();
        res.set_icon("assets/branding/reelcut.ico");
        res.compile().expect("Failed to compile Windows resources");
    }
}
