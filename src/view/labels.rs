//! User-facing strings in the reader's fixed locale.

pub const APP_TITLE: &str = "Kofu Blog";
pub const TAB_HOME: &str = "Ana Sayfa";
pub const TAB_SETTINGS: &str = "Ayarlar";

pub const ALERT_TITLE: &str = "Hata";
pub const AUTHOR_PREFIX: &str = "Yazar:";
pub const ANONYMOUS: &str = "Anonim";

pub const POSTS_LOADING: &str = "Blog postları yükleniyor...";
pub const POSTS_EMPTY: &str = "Henüz blog yazısı yok.";
pub const REFRESHING: &str = "Yenileniyor...";

pub const POST_LOADING: &str = "Blog yükleniyor...";
pub const POST_NOT_FOUND: &str = "Blog bulunamadı.";
pub const GO_BACK: &str = "Geri Dön";
pub const NO_COMMENTS: &str = "Henüz yorum yok.";
pub const COMMENTS_TITLE: &str = "Yorumlar";
pub const COMMENTS_LOADING: &str = "Yorumlar yükleniyor...";
pub const COMMENT_ACTION: &str = "Yorum Yap";
pub const LIKE_ACTION: &str = "Beğen";

pub const PROFILE_LOADING: &str = "Kullanıcı bilgileri yükleniyor...";
pub const PROFILE_TITLE: &str = "Profil";
pub const PROFILE_UNAVAILABLE: &str = "Kullanıcı bilgileri mevcut değil.";
pub const ABOUT_TITLE: &str = "Hakkında";
pub const NO_BIO: &str = "Bu kullanıcı hakkında bilgi yok.";
pub const POSTS_TITLE: &str = "Paylaşımlar";
pub const NO_POSTS: &str = "Bu kullanıcı henüz paylaşım yapmadı.";

pub const SETTINGS_SUBTITLE: &str = "Bu sayfa geliştirme aşamasındadır.";
pub const SETTINGS_DESCRIPTION: &str = "Yakında burada uygulama ayarlarını yönetebileceksiniz.";

pub fn comments_heading(count: usize) -> String {
    format!("{} ({})", COMMENTS_TITLE, count)
}
