//! State-management bundles for the single-page-app flavors.

use webstrap_core::domain::{
    AppShowcase, DependencySpec, EntryPatch, FileCategory, FileContent, FileSpec, GeneratorKind,
    IndexSplice, PluginBundle, TemplateContext,
};

/// Env-var prefix the bundler exposes to client code.
fn env_prefix(ctx: &TemplateContext) -> &'static str {
    match ctx.generator {
        GeneratorKind::ReactVite => "VITE_APP",
        GeneratorKind::ReactCra | GeneratorKind::Next => "REACT_APP",
    }
}

fn env_file(ctx: &TemplateContext) -> String {
    format!(
        "{}_BASE_URL=https://jsonplaceholder.typicode.com/\n",
        env_prefix(ctx)
    )
}

fn env_example_file(ctx: &TemplateContext) -> String {
    format!("{}_BASE_URL=\n", env_prefix(ctx))
}

fn base_url_expression(ctx: &TemplateContext) -> &'static str {
    match ctx.generator {
        GeneratorKind::ReactVite => "import.meta.env.VITE_APP_BASE_URL",
        GeneratorKind::ReactCra | GeneratorKind::Next => "process.env.REACT_APP_BASE_URL",
    }
}

// ── axios client shared by the data-fetching bundles ──────────────────────────

fn axios_api(ctx: &TemplateContext) -> String {
    let post_type = if ctx.typed {
        r#"
type PostType = {
  userId: number;
  id: number;
  title: string;
  body: string;
};
"#
    } else {
        ""
    };
    let get_generics = if ctx.typed { "<PostType[]>" } else { "" };

    format!(
        r#"import axios from "axios";

export const API = axios.create({{
  baseURL: {base_url},
  headers: {{
    "Content-Type": "application/json",
  }},
}});

API.interceptors.request.use(
  config => {{
    const accessToken = localStorage.getItem("accessToken");
    if (accessToken) {{
      config.headers["Authorization"] = `Bearer ${{accessToken}}`;
    }}
    return config;
  }},
  error => Promise.reject(error)
);
{post_type}
export const getPosts = () =>
  API.get{get_generics}("/posts").then(res => res.data);
"#,
        base_url = base_url_expression(ctx),
    )
}

// ── react-query ───────────────────────────────────────────────────────────────

const QUERY_CLIENT: &str = r#"import { QueryClient } from "@tanstack/react-query";

const queryClient = new QueryClient({
  defaultOptions: {
    queries: {
      refetchOnWindowFocus: true,
      refetchOnReconnect: true,
      retry: 3,
      staleTime: 3 * 1000 * 1000,
    },
  },
});

export default queryClient;
"#;

const REACT_QUERY_EXAMPLE: &str = r#"import { useQuery } from "@tanstack/react-query";
import { getPosts } from "src/utils/api";

const ReactQueryExample = () => {
  const { data, error, isLoading } = useQuery({ queryKey: ["posts"], queryFn: getPosts });

  if (error) return <div>An error occurred</div>;

  if (isLoading) return <div>Loading.......</div>;

  return (
    <div>
      {data?.map(post => {
        return <div key={post.id}>{post.title}</div>;
      })}
    </div>
  );
};

export default ReactQueryExample;
"#;

pub fn react_query() -> PluginBundle {
    PluginBundle {
        initializing_message: Some("Adding React Query, Please wait !"),
        success_message: Some("Successfully added React Query with query client config !"),
        files: vec![
            FileSpec {
                dir: &[],
                name: ".env",
                category: FileCategory::Verbatim,
                content: FileContent::Render(env_file),
            },
            FileSpec {
                dir: &[],
                name: ".env.example",
                category: FileCategory::Verbatim,
                content: FileContent::Render(env_example_file),
            },
            FileSpec {
                dir: &["src", "client"],
                name: "queryClient",
                category: FileCategory::Module,
                content: FileContent::Literal(QUERY_CLIENT),
            },
            FileSpec {
                dir: &["src", "utils"],
                name: "api",
                category: FileCategory::Module,
                content: FileContent::Render(axios_api),
            },
            FileSpec {
                dir: &["src", "components", "reactQueryExample"],
                name: "ReactQueryExample",
                category: FileCategory::Component,
                content: FileContent::Literal(REACT_QUERY_EXAMPLE),
            },
        ],
        dependencies: Some(DependencySpec::Literal(
            "@tanstack/react-query @tanstack/react-query-devtools axios",
        )),
        entry_patch: Some(EntryPatch {
            app: Some(AppShowcase {
                import:
                    "import ReactQueryExample from \"src/components/reactQueryExample/ReactQueryExample\";",
                name: "React Query",
                element: "<ReactQueryExample />",
            }),
            index: Some(IndexSplice {
                imports: "import { QueryClientProvider } from \"@tanstack/react-query\";\nimport { ReactQueryDevtools } from \"@tanstack/react-query-devtools\";\nimport queryClient from \"src/client/queryClient\";",
                before: "<QueryClientProvider client={queryClient}>",
                after: "<ReactQueryDevtools />\n    </QueryClientProvider>",
            }),
            ..Default::default()
        }),
        ..PluginBundle::named("react-query")
    }
}

// ── rtk-query + redux ─────────────────────────────────────────────────────────

fn rtk_store(ctx: &TemplateContext) -> String {
    let type_exports = if ctx.typed {
        r#"
export type RootState = ReturnType<typeof store.getState>;
export type AppDispatch = typeof store.dispatch;
"#
    } else {
        ""
    };

    format!(
        r#"import {{ configureStore }} from "@reduxjs/toolkit";
import {{ setupListeners }} from "@reduxjs/toolkit/query";
import {{ postsApi }} from "src/services/postsApi";

export const store = configureStore({{
  reducer: {{
    [postsApi.reducerPath]: postsApi.reducer,
  }},
  middleware: getDefaultMiddleware =>
    getDefaultMiddleware().concat(postsApi.middleware),
}});

setupListeners(store.dispatch);
{type_exports}"#
    )
}

fn posts_api(ctx: &TemplateContext) -> String {
    let post_type = if ctx.typed {
        r#"
export type Post = {
  userId: number;
  id: number;
  title: string;
  body: string;
};
"#
    } else {
        ""
    };
    let generics = if ctx.typed { "<Post[], void>" } else { "" };

    format!(
        r#"import {{ createApi, fetchBaseQuery }} from "@reduxjs/toolkit/query/react";
{post_type}
export const postsApi = createApi({{
  reducerPath: "postsApi",
  baseQuery: fetchBaseQuery({{ baseUrl: {base_url} }}),
  endpoints: builder => ({{
    getPosts: builder.query{generics}({{
      query: () => "posts",
    }}),
  }}),
}});

export const {{ useGetPostsQuery }} = postsApi;
"#,
        base_url = base_url_expression(ctx),
    )
}

const RTK_EXAMPLE: &str = r#"import { useGetPostsQuery } from "src/services/postsApi";

const RtkQueryExample = () => {
  const { data, error, isLoading } = useGetPostsQuery();

  if (error) return <div>An error occurred</div>;

  if (isLoading) return <div>Loading.......</div>;

  return (
    <div>
      {data?.map(post => {
        return <div key={post.id}>{post.title}</div>;
      })}
    </div>
  );
};

export default RtkQueryExample;
"#;

pub fn rtk_query() -> PluginBundle {
    PluginBundle {
        initializing_message: Some("Adding RTK Query with Redux, Please wait !"),
        success_message: Some("Successfully added RTK Query with a configured store !"),
        files: vec![
            FileSpec {
                dir: &[],
                name: ".env",
                category: FileCategory::Verbatim,
                content: FileContent::Render(env_file),
            },
            FileSpec {
                dir: &[],
                name: ".env.example",
                category: FileCategory::Verbatim,
                content: FileContent::Render(env_example_file),
            },
            FileSpec {
                dir: &["src", "store"],
                name: "store",
                category: FileCategory::Module,
                content: FileContent::Render(rtk_store),
            },
            FileSpec {
                dir: &["src", "services"],
                name: "postsApi",
                category: FileCategory::Module,
                content: FileContent::Render(posts_api),
            },
            FileSpec {
                dir: &["src", "components", "rtkQueryExample"],
                name: "RtkQueryExample",
                category: FileCategory::Component,
                content: FileContent::Literal(RTK_EXAMPLE),
            },
        ],
        dependencies: Some(DependencySpec::Literal("@reduxjs/toolkit react-redux")),
        entry_patch: Some(EntryPatch {
            app: Some(AppShowcase {
                import:
                    "import RtkQueryExample from \"src/components/rtkQueryExample/RtkQueryExample\";",
                name: "RTK Query",
                element: "<RtkQueryExample />",
            }),
            index: Some(IndexSplice {
                imports: "import { Provider } from \"react-redux\";\nimport { store } from \"src/store/store\";",
                before: "<Provider store={store}>",
                after: "</Provider>",
            }),
            ..Default::default()
        }),
        ..PluginBundle::named("rtk-query-redux")
    }
}

// ── apollo graphql ────────────────────────────────────────────────────────────

fn apollo_client(ctx: &TemplateContext) -> String {
    format!(
        r#"import {{ ApolloClient, InMemoryCache }} from "@apollo/client";

const client = new ApolloClient({{
  uri: {base_url},
  cache: new InMemoryCache(),
}});

export default client;
"#,
        base_url = base_url_expression(ctx),
    )
}

const GRAPHQL_EXAMPLE: &str = r#"import { gql, useQuery } from "@apollo/client";

const GET_POSTS = gql`
  query GetPosts {
    posts {
      data {
        id
        title
      }
    }
  }
`;

const GraphqlExample = () => {
  const { data, error, loading } = useQuery(GET_POSTS);

  if (error) return <div>An error occurred</div>;

  if (loading) return <div>Loading.......</div>;

  return (
    <div>
      {data?.posts?.data?.map(post => {
        return <div key={post.id}>{post.title}</div>;
      })}
    </div>
  );
};

export default GraphqlExample;
"#;

pub fn graphql() -> PluginBundle {
    PluginBundle {
        initializing_message: Some("Adding Apollo GraphQL Client, Please wait !"),
        success_message: Some("Successfully added Apollo Client with cache config !"),
        files: vec![
            FileSpec {
                dir: &[],
                name: ".env",
                category: FileCategory::Verbatim,
                content: FileContent::Render(env_file),
            },
            FileSpec {
                dir: &["src", "client"],
                name: "apolloClient",
                category: FileCategory::Module,
                content: FileContent::Render(apollo_client),
            },
            FileSpec {
                dir: &["src", "components", "graphqlExample"],
                name: "GraphqlExample",
                category: FileCategory::Component,
                content: FileContent::Literal(GRAPHQL_EXAMPLE),
            },
        ],
        dependencies: Some(DependencySpec::Literal("@apollo/client graphql")),
        entry_patch: Some(EntryPatch {
            app: Some(AppShowcase {
                import:
                    "import GraphqlExample from \"src/components/graphqlExample/GraphqlExample\";",
                name: "Apollo GraphQL",
                element: "<GraphqlExample />",
            }),
            index: Some(IndexSplice {
                imports: "import { ApolloProvider } from \"@apollo/client\";\nimport client from \"src/client/apolloClient\";",
                before: "<ApolloProvider client={client}>",
                after: "</ApolloProvider>",
            }),
            ..Default::default()
        }),
        ..PluginBundle::named("graphql")
    }
}

// ── redux-thunk + axios ───────────────────────────────────────────────────────

fn thunk_store(ctx: &TemplateContext) -> String {
    let type_exports = if ctx.typed {
        r#"
export type RootState = ReturnType<typeof store.getState>;
export type AppDispatch = typeof store.dispatch;
"#
    } else {
        ""
    };

    format!(
        r#"import {{ configureStore }} from "@reduxjs/toolkit";
import postsReducer from "src/store/postsSlice";

export const store = configureStore({{
  reducer: {{
    posts: postsReducer,
  }},
}});
{type_exports}"#
    )
}

fn posts_slice(ctx: &TemplateContext) -> String {
    let state_type = if ctx.typed {
        r#"
type Post = { userId: number; id: number; title: string; body: string };

type PostsState = {
  items: Post[];
  loading: boolean;
};

const initialState: PostsState = { items: [], loading: false };
"#
    } else {
        r#"
const initialState = { items: [], loading: false };
"#
    };

    format!(
        r#"import {{ createAsyncThunk, createSlice }} from "@reduxjs/toolkit";
import {{ API }} from "src/utils/api";
{state_type}
export const fetchPosts = createAsyncThunk("posts/fetch", async () => {{
  const response = await API.get("/posts");
  return response.data;
}});

const postsSlice = createSlice({{
  name: "posts",
  initialState,
  reducers: {{}},
  extraReducers: builder => {{
    builder
      .addCase(fetchPosts.pending, state => {{
        state.loading = true;
      }})
      .addCase(fetchPosts.fulfilled, (state, action) => {{
        state.items = action.payload;
        state.loading = false;
      }});
  }},
}});

export default postsSlice.reducer;
"#
    )
}

const THUNK_EXAMPLE: &str = r#"import { useEffect } from "react";
import { useDispatch, useSelector } from "react-redux";
import { fetchPosts } from "src/store/postsSlice";

const ReduxThunkExample = () => {
  const dispatch = useDispatch();
  const { items, loading } = useSelector(state => state.posts);

  useEffect(() => {
    dispatch(fetchPosts());
  }, [dispatch]);

  if (loading) return <div>Loading.......</div>;

  return (
    <div>
      {items.map(post => {
        return <div key={post.id}>{post.title}</div>;
      })}
    </div>
  );
};

export default ReduxThunkExample;
"#;

pub fn redux_thunk() -> PluginBundle {
    PluginBundle {
        initializing_message: Some("Adding Redux Thunk with Axios, Please wait !"),
        success_message: Some("Successfully added Redux Thunk with an async slice !"),
        files: vec![
            FileSpec {
                dir: &[],
                name: ".env",
                category: FileCategory::Verbatim,
                content: FileContent::Render(env_file),
            },
            FileSpec {
                dir: &["src", "store"],
                name: "store",
                category: FileCategory::Module,
                content: FileContent::Render(thunk_store),
            },
            FileSpec {
                dir: &["src", "store"],
                name: "postsSlice",
                category: FileCategory::Module,
                content: FileContent::Render(posts_slice),
            },
            FileSpec {
                dir: &["src", "utils"],
                name: "api",
                category: FileCategory::Module,
                content: FileContent::Render(axios_api),
            },
            FileSpec {
                dir: &["src", "components", "reduxThunkExample"],
                name: "ReduxThunkExample",
                category: FileCategory::Component,
                content: FileContent::Literal(THUNK_EXAMPLE),
            },
        ],
        dependencies: Some(DependencySpec::Literal(
            "@reduxjs/toolkit react-redux axios",
        )),
        entry_patch: Some(EntryPatch {
            app: Some(AppShowcase {
                import:
                    "import ReduxThunkExample from \"src/components/reduxThunkExample/ReduxThunkExample\";",
                name: "Redux Thunk",
                element: "<ReduxThunkExample />",
            }),
            index: Some(IndexSplice {
                imports: "import { Provider } from \"react-redux\";\nimport { store } from \"src/store/store\";",
                before: "<Provider store={store}>",
                after: "</Provider>",
            }),
            ..Default::default()
        }),
        ..PluginBundle::named("redux-thunk-axios")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vite_ts() -> TemplateContext {
        TemplateContext {
            typed: true,
            generator: GeneratorKind::ReactVite,
        }
    }

    fn cra_js() -> TemplateContext {
        TemplateContext {
            typed: false,
            generator: GeneratorKind::ReactCra,
        }
    }

    #[test]
    fn env_prefix_follows_the_bundler() {
        assert!(env_file(&vite_ts()).starts_with("VITE_APP_BASE_URL="));
        assert!(env_file(&cra_js()).starts_with("REACT_APP_BASE_URL="));
    }

    #[test]
    fn axios_api_reads_env_through_the_bundler() {
        assert!(axios_api(&vite_ts()).contains("import.meta.env.VITE_APP_BASE_URL"));
        assert!(axios_api(&cra_js()).contains("process.env.REACT_APP_BASE_URL"));
    }

    #[test]
    fn axios_api_types_appear_only_when_typed() {
        assert!(axios_api(&vite_ts()).contains("type PostType"));
        assert!(!axios_api(&cra_js()).contains("type PostType"));
    }

    #[test]
    fn rtk_store_exports_types_only_when_typed() {
        assert!(rtk_store(&vite_ts()).contains("export type RootState"));
        assert!(!rtk_store(&cra_js()).contains("export type RootState"));
    }

    #[test]
    fn all_bundles_write_an_env_file() {
        for bundle in [react_query(), rtk_query(), graphql(), redux_thunk()] {
            assert!(
                bundle.files.iter().any(|f| f.name == ".env"),
                "{} is missing .env",
                bundle.name
            );
        }
    }

    #[test]
    fn provider_splices_are_balanced() {
        // Every index splice opens in `before` what it closes in `after`.
        let cases = [
            (react_query(), "QueryClientProvider"),
            (rtk_query(), "Provider"),
            (graphql(), "ApolloProvider"),
            (redux_thunk(), "Provider"),
        ];
        for (bundle, tag) in cases {
            let index = bundle.entry_patch.unwrap().index.unwrap();
            assert!(index.before.contains(&format!("<{tag}")), "{tag}");
            assert!(index.after.contains(&format!("</{tag}>")), "{tag}");
        }
    }
}
