//! User-facing texts and menu-button labels.

pub const LABEL_HELP: &str = "❓ 帮助";
pub const LABEL_FILES: &str = "📂 文件列表";
pub const LABEL_DELETE: &str = "🗑 删除文件";
pub const LABEL_UPLOAD: &str = "📤 上传文件";

pub const MENU_READY: &str = "菜单已就绪，可以使用下方按钮操作";
pub const WELCOME: &str =
    "欢迎使用 ZSNET Bot\n向我发送文件来上传\n使用 /list 查看文件列表\n使用 /delete 删除文件";
pub const UPLOAD_HINT: &str = "直接向我发送文件、图片或视频即可上传";

pub const LIST_HEADER: &str = "文件列表:";
pub const NO_FILES: &str = "没有找到任何文件哦";

pub const DELETE_PROMPT: &str = "请输入要删除的文件名，或者回复包含文件的消息并使用 /delete";
pub const DELETE_NOT_FOUND: &str = "未找到指定文件";
pub const DOWNLOAD_NOT_FOUND: &str = "未找到文件";

pub const SAVE_OK: &str = "文件保存成功";
pub const SAVE_FAILED: &str = "文件保存失败";
pub const PHOTO_SAVED: &str = "图片已保存";
pub const VIDEO_SAVED: &str = "视频已保存";

pub const INVALID_COMMAND: &str = "命令错误";

pub fn deleted(display_name: &str) -> String {
    format!("文件已删除: {}", display_name)
}

/// Reply keyboard: two rows of two buttons.
pub fn menu_keyboard() -> Vec<Vec<String>> {
    vec![
        vec![LABEL_HELP.to_string(), LABEL_FILES.to_string()],
        vec![LABEL_DELETE.to_string(), LABEL_UPLOAD.to_string()],
    ]
}
