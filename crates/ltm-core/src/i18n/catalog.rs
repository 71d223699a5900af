//! Static per-locale message tables.
//!
//! Wording follows the shipped product translations; Chinese is the default
//! locale and the reference wording for the rest.

use super::{Lang, Messages};

/// The message table for `lang`.
pub fn messages(lang: Lang) -> &'static Messages {
    match lang {
        Lang::Zh => &ZH,
        Lang::En => &EN,
        Lang::Es => &ES,
        Lang::Fr => &FR,
        Lang::De => &DE,
        Lang::Ja => &JA,
        Lang::Ko => &KO,
        Lang::It => &IT,
        Lang::Pt => &PT,
        Lang::Ru => &RU,
    }
}

static ZH: Messages = Messages {
    searching: "正在搜索...",
    found_snapshot: "找到 {date} 的存档快照",
    found_domain_snapshot: "未找到该页面的存档，已找到主域名 {date} 的快照",
    no_archive_found: "未找到存档",
    no_archive_found_domain: "未找到存档 - {domain}",
    no_page_archive_found: "未找到该页面的存档",
    error_fetching: "获取历史快照时出错: {error}",
    unknown_error: "未知错误",
    please_enter_url: "请输入网址",
    please_enter_valid_url: "请输入有效的网址",
    cannot_get_current_url: "无法获取当前页面网址",
    language_set: "语言已切换为 {name}",
    panel_url_prompt: "网址> ",
    panel_current_page: "当前页面: {domain} (输入 :page 搜索它)",
    date_format: "%Y年%-m月%-d日 %H:%M",
};

static EN: Messages = Messages {
    searching: "Searching...",
    found_snapshot: "Found a snapshot from {date}",
    found_domain_snapshot: "No archive of this page; found a domain snapshot from {date}",
    no_archive_found: "No archive found",
    no_archive_found_domain: "No archive found - {domain}",
    no_page_archive_found: "No page archive found",
    error_fetching: "Error fetching historical snapshot: {error}",
    unknown_error: "Unknown error",
    please_enter_url: "Please enter a URL",
    please_enter_valid_url: "Please enter a valid URL",
    cannot_get_current_url: "Cannot get the current page URL",
    language_set: "Language set to {name}",
    panel_url_prompt: "url> ",
    panel_current_page: "Current page: {domain} (type :page to search it)",
    date_format: "%b %-d, %Y %H:%M",
};

static ES: Messages = Messages {
    searching: "Buscando...",
    found_snapshot: "Se encontró una captura del {date}",
    found_domain_snapshot: "Sin archivo de esta página; se encontró una captura del dominio del {date}",
    no_archive_found: "No se encontró archivo",
    no_archive_found_domain: "No se encontró archivo - {domain}",
    no_page_archive_found: "No se encontró archivo de la página",
    error_fetching: "Error al obtener captura histórica: {error}",
    unknown_error: "Error desconocido",
    please_enter_url: "Introduce una URL",
    please_enter_valid_url: "Introduce una URL válida",
    cannot_get_current_url: "No se puede obtener la URL de la página actual",
    language_set: "Idioma cambiado a {name}",
    panel_url_prompt: "url> ",
    panel_current_page: "Página actual: {domain} (escribe :page para buscarla)",
    date_format: "%d/%m/%Y %H:%M",
};

static FR: Messages = Messages {
    searching: "Recherche...",
    found_snapshot: "Capture trouvée du {date}",
    found_domain_snapshot: "Aucune archive de cette page ; capture du domaine trouvée du {date}",
    no_archive_found: "Aucune archive trouvée",
    no_archive_found_domain: "Aucune archive trouvée - {domain}",
    no_page_archive_found: "Aucune archive de la page trouvée",
    error_fetching: "Erreur lors de la récupération de la capture historique : {error}",
    unknown_error: "Erreur inconnue",
    please_enter_url: "Veuillez saisir une URL",
    please_enter_valid_url: "Veuillez saisir une URL valide",
    cannot_get_current_url: "Impossible d'obtenir l'URL de la page actuelle",
    language_set: "Langue définie sur {name}",
    panel_url_prompt: "url> ",
    panel_current_page: "Page actuelle : {domain} (tapez :page pour la rechercher)",
    date_format: "%d/%m/%Y %H:%M",
};

static DE: Messages = Messages {
    searching: "Suche läuft...",
    found_snapshot: "Schnappschuss vom {date} gefunden",
    found_domain_snapshot: "Kein Archiv dieser Seite; Domain-Schnappschuss vom {date} gefunden",
    no_archive_found: "Kein Archiv gefunden",
    no_archive_found_domain: "Kein Archiv gefunden - {domain}",
    no_page_archive_found: "Kein Seitenarchiv gefunden",
    error_fetching: "Fehler beim Abrufen des historischen Schnappschusses: {error}",
    unknown_error: "Unbekannter Fehler",
    please_enter_url: "Bitte eine URL eingeben",
    please_enter_valid_url: "Bitte eine gültige URL eingeben",
    cannot_get_current_url: "URL der aktuellen Seite nicht verfügbar",
    language_set: "Sprache auf {name} umgestellt",
    panel_url_prompt: "url> ",
    panel_current_page: "Aktuelle Seite: {domain} (:page sucht danach)",
    date_format: "%d.%m.%Y %H:%M",
};

static JA: Messages = Messages {
    searching: "検索中...",
    found_snapshot: "{date} のスナップショットが見つかりました",
    found_domain_snapshot: "このページのアーカイブはありません。ドメインの {date} のスナップショットが見つかりました",
    no_archive_found: "アーカイブが見つかりません",
    no_archive_found_domain: "アーカイブが見つかりません - {domain}",
    no_page_archive_found: "ページのアーカイブが見つかりません",
    error_fetching: "履歴スナップショットの取得エラー: {error}",
    unknown_error: "不明なエラー",
    please_enter_url: "URLを入力してください",
    please_enter_valid_url: "有効なURLを入力してください",
    cannot_get_current_url: "現在のページのURLを取得できません",
    language_set: "言語を{name}に設定しました",
    panel_url_prompt: "url> ",
    panel_current_page: "現在のページ: {domain} (:page で検索)",
    date_format: "%Y年%-m月%-d日 %H:%M",
};

static KO: Messages = Messages {
    searching: "검색 중...",
    found_snapshot: "{date}의 스냅샷을 찾았습니다",
    found_domain_snapshot: "이 페이지의 아카이브가 없어 도메인의 {date} 스냅샷을 찾았습니다",
    no_archive_found: "아카이브를 찾을 수 없습니다",
    no_archive_found_domain: "아카이브를 찾을 수 없습니다 - {domain}",
    no_page_archive_found: "페이지 아카이브를 찾을 수 없습니다",
    error_fetching: "역사 스냅샷 가져오기 오류: {error}",
    unknown_error: "알 수 없는 오류",
    please_enter_url: "URL을 입력하세요",
    please_enter_valid_url: "유효한 URL을 입력하세요",
    cannot_get_current_url: "현재 페이지 URL을 가져올 수 없습니다",
    language_set: "언어가 {name}(으)로 설정되었습니다",
    panel_url_prompt: "url> ",
    panel_current_page: "현재 페이지: {domain} (:page 로 검색)",
    date_format: "%Y년 %-m월 %-d일 %H:%M",
};

static IT: Messages = Messages {
    searching: "Ricerca in corso...",
    found_snapshot: "Trovata un'istantanea del {date}",
    found_domain_snapshot: "Nessun archivio di questa pagina; trovata un'istantanea del dominio del {date}",
    no_archive_found: "Nessun archivio trovato",
    no_archive_found_domain: "Nessun archivio trovato - {domain}",
    no_page_archive_found: "Nessun archivio della pagina trovato",
    error_fetching: "Errore nel recupero dell'istantanea storica: {error}",
    unknown_error: "Errore sconosciuto",
    please_enter_url: "Inserisci un URL",
    please_enter_valid_url: "Inserisci un URL valido",
    cannot_get_current_url: "Impossibile ottenere l'URL della pagina corrente",
    language_set: "Lingua impostata su {name}",
    panel_url_prompt: "url> ",
    panel_current_page: "Pagina corrente: {domain} (digita :page per cercarla)",
    date_format: "%d/%m/%Y %H:%M",
};

static PT: Messages = Messages {
    searching: "Buscando...",
    found_snapshot: "Captura encontrada de {date}",
    found_domain_snapshot: "Sem arquivo desta página; captura do domínio encontrada de {date}",
    no_archive_found: "Nenhum arquivo encontrado",
    no_archive_found_domain: "Nenhum arquivo encontrado - {domain}",
    no_page_archive_found: "Nenhum arquivo da página encontrado",
    error_fetching: "Erro ao buscar captura histórica: {error}",
    unknown_error: "Erro desconhecido",
    please_enter_url: "Digite uma URL",
    please_enter_valid_url: "Digite uma URL válida",
    cannot_get_current_url: "Não foi possível obter a URL da página atual",
    language_set: "Idioma definido como {name}",
    panel_url_prompt: "url> ",
    panel_current_page: "Página atual: {domain} (digite :page para buscá-la)",
    date_format: "%d/%m/%Y %H:%M",
};

static RU: Messages = Messages {
    searching: "Поиск...",
    found_snapshot: "Найден снимок от {date}",
    found_domain_snapshot: "Архива этой страницы нет; найден снимок домена от {date}",
    no_archive_found: "Архив не найден",
    no_archive_found_domain: "Архив не найден - {domain}",
    no_page_archive_found: "Архив страницы не найден",
    error_fetching: "Ошибка получения исторического снимка: {error}",
    unknown_error: "Неизвестная ошибка",
    please_enter_url: "Введите URL",
    please_enter_valid_url: "Введите корректный URL",
    cannot_get_current_url: "Не удалось получить URL текущей страницы",
    language_set: "Язык переключён на {name}",
    panel_url_prompt: "url> ",
    panel_current_page: "Текущая страница: {domain} (:page для поиска)",
    date_format: "%d.%m.%Y %H:%M",
};
